//! Check detection and legal move enumeration.
//!
//! A move is legal when it is pseudo-legal and the mover's king is not
//! attacked afterwards. The "afterwards" is always evaluated on a scratch
//! copy produced by [`make_move`], so probing a move can never disturb the
//! board it was asked about.

use crate::movegen::{attacks, candidate_targets};
use crate::resolve::resolve_move;
use crate::special::make_move;
use crate::{Board, GameError};
use chess_core::{Color, Move, PieceKind, Square};

/// Returns true if any piece of `by` attacks `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| attacks(board, from, sq))
}

/// Returns true if the king of `color` is attacked.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, GameError> {
    let king = board.find_king(color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// Returns true if playing `mv` would leave (or put) the mover's king in check.
pub fn would_leave_king_in_check(board: &Board, mv: &Move) -> Result<bool, GameError> {
    let after = make_move(board, mv);
    is_in_check(&after, mv.mover)
}

/// Lists every legal move for `color`.
///
/// Promotions appear once per promotion choice. `en_passant` is the square a
/// pawn passed over on the previous move, if any.
pub fn legal_moves(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
) -> Result<Vec<Move>, GameError> {
    let mut moves = Vec::new();
    scan_legal_moves(board, color, en_passant, |mv| {
        moves.push(mv);
        true
    })?;
    Ok(moves)
}

/// Returns true if `color` has at least one legal move.
pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
) -> Result<bool, GameError> {
    let mut found = false;
    scan_legal_moves(board, color, en_passant, |_| {
        found = true;
        false
    })?;
    Ok(found)
}

/// Feeds each legal move to `visit` until it returns false.
fn scan_legal_moves<F>(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
    mut visit: F,
) -> Result<(), GameError>
where
    F: FnMut(Move) -> bool,
{
    // The king must exist before any move can be judged against it.
    board.find_king(color)?;

    let origins: Vec<(Square, PieceKind)> = board
        .pieces_of(color)
        .map(|(sq, piece)| (sq, piece.kind))
        .collect();

    for (from, kind) in origins {
        let mut targets = candidate_targets(board, from);
        if kind == PieceKind::King {
            targets.extend([from.offset(0, 2), from.offset(0, -2)].into_iter().flatten());
        }

        for to in targets {
            let promotes = kind == PieceKind::Pawn && to.row() == color.promotion_row();
            let choices: &[Option<PieceKind>] = if promotes {
                &[
                    Some(PieceKind::Queen),
                    Some(PieceKind::Rook),
                    Some(PieceKind::Bishop),
                    Some(PieceKind::Knight),
                ]
            } else {
                &[None]
            };

            for &choice in choices {
                let mv = match resolve_move(board, en_passant, from, to, choice) {
                    Ok(mv) => mv,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(_) => continue,
                };
                if would_leave_king_in_check(board, &mv)? {
                    continue;
                }
                if !visit(mv) {
                    return Ok(());
                }
            }
        }
    }

    Ok(())
}
