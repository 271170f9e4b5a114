//! Destination generation from movement templates.
//!
//! Sliding pieces walk their rays until the board edge or the first occupied
//! square; that square is included when it holds an enemy piece. Leaping
//! pieces (knight, king) use fixed offsets regardless of what lies between.

use crate::Board;
use chess_core::{Movement, Square};

/// Returns the squares the piece on `from` can reach by its movement
/// templates, honoring blocking and friendly occupancy.
///
/// Pawn pushes and diagonal steps are listed geometrically (single push,
/// double push, both diagonals); the validator decides which of those the
/// current occupancy allows. Castling targets are not included.
pub fn candidate_targets(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let color = piece.color;
    let mut targets = Vec::with_capacity(28);

    match piece.movement() {
        Movement::Slide(directions) => {
            for &(dr, dc) in directions {
                let mut current = from;
                while let Some(next) = current.offset(dr, dc) {
                    match board.occupant_color(next) {
                        None => targets.push(next),
                        Some(c) => {
                            if c != color {
                                targets.push(next);
                            }
                            break;
                        }
                    }
                    current = next;
                }
            }
        }
        Movement::Leap(offsets) => {
            for &(dr, dc) in offsets {
                if let Some(to) = from.offset(dr, dc) {
                    if board.occupant_color(to) != Some(color) {
                        targets.push(to);
                    }
                }
            }
        }
        Movement::Pawn { forward } => {
            for (dr, dc) in [(forward, 0), (2 * forward, 0), (forward, -1), (forward, 1)] {
                if let Some(to) = from.offset(dr, dc) {
                    if board.occupant_color(to) != Some(color) {
                        targets.push(to);
                    }
                }
            }
        }
    }

    targets
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a shared row, column, or diagonal;
/// other pairs have no "between" and report a clear path.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    let aligned = dr == 0 || dc == 0 || dr.abs() == dc.abs();
    if !aligned {
        return true;
    }
    let step = (dr.signum(), dc.signum());
    let mut current = from;
    loop {
        let Some(next) = current.offset(step.0, step.1) else {
            return true;
        };
        if next == to {
            return true;
        }
        if board.is_occupied(next) {
            return false;
        }
        current = next;
    }
}

/// Returns true if the piece on `from` attacks `target`.
///
/// This is piece shape plus a clear path, with the occupancy of `target`
/// itself ignored. Pawns attack only their two forward diagonals.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    let delta = from.delta_to(target);
    match piece.movement() {
        Movement::Pawn { forward } => delta.0 == forward && delta.1.abs() == 1,
        Movement::Leap(_) => piece.movement().matches(delta),
        movement @ Movement::Slide(_) => {
            movement.matches(delta) && path_is_clear(board, from, target)
        }
    }
}
