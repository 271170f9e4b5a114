//! Pseudo-legal move validation.
//!
//! A move is pseudo-legal when it fits the piece's movement templates, its
//! path is clear, and the destination is empty or hostile. Whether the move
//! exposes the mover's king is a separate question answered by [`crate::check`].

use crate::movegen::path_is_clear;
use crate::{Board, GameError};
use chess_core::{Color, MoveFlag, PieceKind, Square};

/// Checks the geometry and occupancy of moving `mover`'s piece from `from`
/// to `to`, returning [`MoveFlag::Capture`] or [`MoveFlag::Normal`].
///
/// Castling and en passant are not recognized here; a pawn stepping
/// diagonally onto an empty square is rejected.
pub fn validate(board: &Board, from: Square, to: Square, mover: Color) -> Result<MoveFlag, GameError> {
    let piece = match board.piece_at(from) {
        Some(p) if p.color == mover => *p,
        _ => return Err(GameError::NoPieceAtSource(from)),
    };
    let illegal = |why: &str| GameError::IllegalMove(format!("{}{}: {}", from, to, why));

    let delta = from.delta_to(to);
    if !piece.movement().matches(delta) {
        return Err(illegal(&format!("a {} does not move that way", piece.kind)));
    }

    if piece.kind.is_slider() && !path_is_clear(board, from, to) {
        return Err(illegal("the path is blocked"));
    }

    let target = board.piece_at(to);
    if let Some(t) = target {
        if t.color == mover {
            return Err(illegal("the destination holds a friendly piece"));
        }
    }

    if piece.kind == PieceKind::Pawn {
        let (dr, dc) = delta;
        if dc == 0 {
            if target.is_some() {
                return Err(illegal("a pawn cannot capture straight ahead"));
            }
            if dr.abs() == 2 {
                if from.row() != mover.pawn_row() {
                    return Err(illegal("a pawn may only advance two rows from its starting row"));
                }
                if !path_is_clear(board, from, to) {
                    return Err(illegal("the path is blocked"));
                }
            }
        } else if target.is_none() {
            return Err(illegal("a pawn moves diagonally only to capture"));
        }
    }

    Ok(if target.is_some() {
        MoveFlag::Capture
    } else {
        MoveFlag::Normal
    })
}

/// Returns true if the move passes [`validate`].
#[inline]
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    validate(board, from, to, mover).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn opening_moves() {
        let board = Board::standard();
        assert_eq!(
            validate(&board, sq("e2"), sq("e4"), Color::White),
            Ok(MoveFlag::Normal)
        );
        assert!(is_pseudo_legal(&board, sq("e2"), sq("e3"), Color::White));
        assert!(is_pseudo_legal(&board, sq("g1"), sq("f3"), Color::White));
        assert!(is_pseudo_legal(&board, sq("b8"), sq("c6"), Color::Black));
        assert!(!is_pseudo_legal(&board, sq("e2"), sq("e5"), Color::White));
        assert!(!is_pseudo_legal(&board, sq("f1"), sq("c4"), Color::White));
        assert!(!is_pseudo_legal(&board, sq("a1"), sq("a2"), Color::White));
    }

    #[test]
    fn source_must_hold_movers_piece() {
        let board = Board::standard();
        assert_eq!(
            validate(&board, sq("e4"), sq("e5"), Color::White),
            Err(GameError::NoPieceAtSource(sq("e4")))
        );
        assert_eq!(
            validate(&board, sq("e7"), sq("e5"), Color::White),
            Err(GameError::NoPieceAtSource(sq("e7")))
        );
    }

    #[test]
    fn null_move_is_illegal() {
        let board = Board::standard();
        assert!(!is_pseudo_legal(&board, sq("g1"), sq("g1"), Color::White));
    }

    #[test]
    fn pawn_rules() {
        let mut board = Board::standard();
        // Blocked single push.
        board.place_piece(sq("d3"), Piece::new(PieceKind::Knight, Color::Black));
        assert!(!is_pseudo_legal(&board, sq("d2"), sq("d3"), Color::White));
        // Double push jumping over the blocker.
        assert!(!is_pseudo_legal(&board, sq("d2"), sq("d4"), Color::White));
        // Diagonal capture of the blocker.
        assert_eq!(
            validate(&board, sq("c2"), sq("d3"), Color::White),
            Ok(MoveFlag::Capture)
        );
        // Diagonal onto an empty square.
        assert!(!is_pseudo_legal(&board, sq("c2"), sq("b3"), Color::White));
        // Backwards.
        let mut board = Board::empty();
        board.place_piece(sq("e4"), Piece::new(PieceKind::Pawn, Color::White));
        assert!(!is_pseudo_legal(&board, sq("e4"), sq("e3"), Color::White));
        // Double step away from the starting row.
        assert!(!is_pseudo_legal(&board, sq("e4"), sq("e6"), Color::White));
        assert!(is_pseudo_legal(&board, sq("e4"), sq("e5"), Color::White));
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let board = Board::standard();
        assert!(is_pseudo_legal(&board, sq("e7"), sq("e5"), Color::Black));
        assert!(!is_pseudo_legal(&board, sq("e7"), sq("e8"), Color::Black));
    }

    #[test]
    fn friendly_fire_is_illegal() {
        let board = Board::standard();
        assert!(!is_pseudo_legal(&board, sq("d1"), sq("d2"), Color::White));
        assert!(!is_pseudo_legal(&board, sq("b1"), sq("d2"), Color::White));
    }

    #[test]
    fn sliding_capture_stops_at_target() {
        let mut board = Board::empty();
        board.place_piece(sq("a1"), Piece::new(PieceKind::Rook, Color::White));
        board.place_piece(sq("a5"), Piece::new(PieceKind::Bishop, Color::Black));
        assert_eq!(
            validate(&board, sq("a1"), sq("a5"), Color::White),
            Ok(MoveFlag::Capture)
        );
        assert!(!is_pseudo_legal(&board, sq("a1"), sq("a6"), Color::White));
    }

    #[test]
    fn kings_step_once() {
        let mut board = Board::empty();
        board.place_piece(sq("e4"), Piece::new(PieceKind::King, Color::White));
        assert!(is_pseudo_legal(&board, sq("e4"), sq("f5"), Color::White));
        assert!(!is_pseudo_legal(&board, sq("e4"), sq("g4"), Color::White));
    }
}
