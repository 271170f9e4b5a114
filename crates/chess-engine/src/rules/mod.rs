//! Game status evaluation.
//!
//! After every accepted move the status is recomputed for the side about to
//! move. Checkmate and stalemate are decided first; the automatic draws
//! (insufficient material, the 75-move rule) only apply to positions where
//! the side to move still has a legal move.

mod material;

pub use material::is_insufficient_material;

use crate::check::{has_any_legal_move, is_in_check};
use crate::{Board, GameError};
use chess_core::{Color, Square};
use std::fmt;

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const SEVENTY_FIVE_MOVE_LIMIT: u32 = 150;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Nobody is in check and the game continues.
    #[default]
    InProgress,
    /// The given side is in check but has a way out.
    Check(Color),
    /// The given side has delivered mate and won.
    Checkmate(Color),
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// The game was drawn for the given reason.
    Draw(DrawReason),
}

/// Reason for a draw other than stalemate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// Neither side has enough material left to mate.
    InsufficientMaterial,
    /// 75-move rule (150 half-moves without pawn move or capture) - automatic.
    SeventyFiveMoveRule,
    /// Both players agreed to a draw.
    Agreement,
}

impl GameStatus {
    /// Returns true once no further moves may be submitted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate(_) | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }

    /// Returns the winner, if the game ended decisively.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(winner) => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{} is in check", color),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw ({})", reason),
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::SeventyFiveMoveRule => "75-move rule",
            DrawReason::Agreement => "agreement",
        };
        f.write_str(s)
    }
}

/// Maps the check / mobility pair of the side to move onto a status.
///
/// | in check | can move | status |
/// |---|---|---|
/// | yes | yes | `Check(to_move)` |
/// | yes | no | `Checkmate(opponent)` |
/// | no | yes | `InProgress` |
/// | no | no | `Stalemate` |
pub const fn classify(in_check: bool, can_move: bool, to_move: Color) -> GameStatus {
    match (in_check, can_move) {
        (true, true) => GameStatus::Check(to_move),
        (true, false) => GameStatus::Checkmate(to_move.opposite()),
        (false, true) => GameStatus::InProgress,
        (false, false) => GameStatus::Stalemate,
    }
}

/// Computes the status of `board` with `to_move` about to play.
pub fn evaluate(
    board: &Board,
    to_move: Color,
    en_passant: Option<Square>,
    halfmove_clock: u32,
) -> Result<GameStatus, GameError> {
    let in_check = is_in_check(board, to_move)?;
    let can_move = has_any_legal_move(board, to_move, en_passant)?;

    if can_move {
        if is_insufficient_material(board) {
            return Ok(GameStatus::Draw(DrawReason::InsufficientMaterial));
        }
        if halfmove_clock >= SEVENTY_FIVE_MOVE_LIMIT {
            return Ok(GameStatus::Draw(DrawReason::SeventyFiveMoveRule));
        }
    }

    Ok(classify(in_check, can_move, to_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn board_from(pieces: &[(&str, char)]) -> Board {
        let mut board = Board::empty();
        for &(at, symbol) in pieces {
            board.place_piece(
                Square::from_algebraic(at).unwrap(),
                Piece::from_symbol(symbol).unwrap(),
            );
        }
        board
    }

    #[test]
    fn classification_table() {
        assert_eq!(classify(true, true, Color::Black), GameStatus::Check(Color::Black));
        assert_eq!(
            classify(true, false, Color::Black),
            GameStatus::Checkmate(Color::White)
        );
        assert_eq!(classify(false, true, Color::White), GameStatus::InProgress);
        assert_eq!(classify(false, false, Color::White), GameStatus::Stalemate);
    }

    #[test]
    fn terminal_states() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(!GameStatus::Check(Color::White).is_terminal());
        assert!(GameStatus::Checkmate(Color::White).is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Draw(DrawReason::Agreement).is_terminal());
        assert_eq!(GameStatus::Checkmate(Color::Black).winner(), Some(Color::Black));
        assert_eq!(GameStatus::Stalemate.winner(), None);
    }

    #[test]
    fn start_position_is_in_progress() {
        let status = evaluate(&Board::standard(), Color::White, None, 0).unwrap();
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn stalemate_beats_insufficient_material() {
        // Lone kings would be a material draw, but Black cannot move at all.
        let board = board_from(&[("h8", 'k'), ("f7", 'Q'), ("g6", 'K')]);
        assert_eq!(
            evaluate(&board, Color::Black, None, 0).unwrap(),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn checkmate_beats_seventy_five_moves() {
        // Back-rank mate delivered on the 150th quiet half-move.
        let board = board_from(&[("g8", 'k'), ("f7", 'p'), ("g7", 'p'), ("h7", 'p'), ("a8", 'R'), ("g1", 'K')]);
        assert_eq!(
            evaluate(&board, Color::Black, None, 150).unwrap(),
            GameStatus::Checkmate(Color::White)
        );
    }

    #[test]
    fn automatic_draws() {
        let board = board_from(&[("e1", 'K'), ("h1", 'k')]);
        assert_eq!(
            evaluate(&board, Color::White, None, 0).unwrap(),
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        );

        let board = board_from(&[("e1", 'K'), ("a1", 'R'), ("h8", 'k')]);
        assert_eq!(
            evaluate(&board, Color::White, None, 149).unwrap(),
            GameStatus::InProgress
        );
        assert_eq!(
            evaluate(&board, Color::White, None, 150).unwrap(),
            GameStatus::Draw(DrawReason::SeventyFiveMoveRule)
        );
    }

    #[test]
    fn check_is_reported_for_the_side_in_check() {
        let board = board_from(&[("e1", 'K'), ("e8", 'k'), ("e5", 'R')]);
        assert_eq!(
            evaluate(&board, Color::Black, None, 0).unwrap(),
            GameStatus::Check(Color::Black)
        );
    }
}
