//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and
//! its front-ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Movement`] for the per-kind movement templates
//! - [`Square`] for row/column board coordinates
//! - [`Move`] and [`MoveFlag`] for committed moves

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::{parse_coordinate_move, CastleSide, Move, MoveFlag};
pub use piece::{Movement, Piece, PieceKind};
pub use square::{Square, SquareError};
