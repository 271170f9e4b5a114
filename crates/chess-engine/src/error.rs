//! Errors reported by the rules engine.

use crate::fen::FenError;
use chess_core::{Color, Square, SquareError};
use thiserror::Error;

/// Reasons a move submission (or board query) can fail.
///
/// Every variant except [`GameError::InvariantViolation`] leaves the game
/// untouched and the caller may simply ask for another move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("no piece on {0}")]
    NoPieceAtSource(Square),

    #[error("it is {0}'s turn")]
    NotYourTurn(Color),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("move {0} would leave the king in check")]
    MoveExposesCheck(String),

    #[error("a pawn cannot promote to {0}")]
    InvalidPromotionChoice(chess_core::PieceKind),

    #[error("move {0} reaches the last row; a promotion piece is required")]
    PromotionChoiceRequired(String),

    #[error("the game is over")]
    GameOver,

    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    InvalidFen(#[from] FenError),
}

impl GameError {
    /// Returns true if the session cannot continue after this error.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::InvariantViolation(_))
    }
}

impl From<SquareError> for GameError {
    fn from(e: SquareError) -> Self {
        match e {
            SquareError::OutOfBounds { row, col } => GameError::OutOfBounds { row, col },
            SquareError::InvalidNotation(s) => {
                GameError::IllegalMove(format!("cannot read '{}'", s))
            }
        }
    }
}
