//! Rules engine for two-player chess.
//!
//! This crate provides:
//! - [`Board`] - 8x8 container of optional pieces with no rule checking
//! - [`validator`] - pseudo-legal move validation from movement templates
//! - [`check`] - attack detection, self-check simulation and legal move listing
//! - [`special`] - castling, en passant and promotion
//! - [`GameState`] - the move-commit protocol, history and [`GameStatus`]
//! - FEN loading and export, and perft for move generation testing
//!
//! # Example
//!
//! ```
//! use chess_engine::{GameState, GameStatus};
//! use chess_core::Color;
//!
//! let mut game = GameState::new();
//! game.submit_notation("e2e4").unwrap();
//! game.submit_notation("e7e5").unwrap();
//! assert_eq!(game.turn(), Color::White);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! println!("Position after 1.e4 e5: {}", game.to_fen());
//! ```

mod board;
pub mod check;
mod error;
pub mod fen;
mod game;
pub mod movegen;
pub mod perft;
mod resolve;
pub mod rules;
pub mod special;
pub mod validator;

pub use board::Board;
pub use error::GameError;
pub use fen::FenError;
pub use game::{GameState, MoveOutcome};
pub use resolve::resolve_move;
pub use rules::{DrawReason, GameStatus};
