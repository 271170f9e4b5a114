//! Castling, en passant, and promotion.
//!
//! Eligibility checks live next to [`make_move`], which executes any
//! classified [`Move`] (special or not) on a copy of the board.

use crate::check::{is_in_check, is_square_attacked};
use crate::{Board, GameError};
use chess_core::{CastleSide, Color, Move, MoveFlag, Piece, PieceKind, Square};

/// Returns the castling side if `from -> to` is a king on its home square
/// stepping two columns along its back row.
///
/// This only recognizes the shape of the request; [`check_castling`] decides
/// whether it is allowed.
pub fn castle_side(board: &Board, from: Square, to: Square, mover: Color) -> Option<CastleSide> {
    let piece = board.piece_at(from)?;
    if piece.kind != PieceKind::King || piece.color != mover {
        return None;
    }
    if from != CastleSide::king_home(mover) {
        return None;
    }
    CastleSide::ALL
        .into_iter()
        .find(|side| side.king_target(mover) == to)
}

/// Verifies that `mover` may castle towards `side`.
///
/// Requires an unmoved king and rook, empty squares between them, a king
/// not in check, and no attacked square on the king's path including its
/// destination.
pub fn check_castling(board: &Board, mover: Color, side: CastleSide) -> Result<(), GameError> {
    let home = CastleSide::king_home(mover);
    let rook_sq = side.rook_home(mover);
    let refuse = |why: &str| GameError::IllegalMove(format!("cannot castle {:?}: {}", side, why));

    match board.piece_at(home) {
        Some(p) if p.kind == PieceKind::King && p.color == mover && !p.has_moved => {}
        Some(p) if p.kind == PieceKind::King && p.color == mover => {
            return Err(refuse("the king has already moved"))
        }
        _ => return Err(refuse("the king is not on its home square")),
    }
    match board.piece_at(rook_sq) {
        Some(p) if p.kind == PieceKind::Rook && p.color == mover && !p.has_moved => {}
        Some(p) if p.kind == PieceKind::Rook && p.color == mover => {
            return Err(refuse("the rook has already moved"))
        }
        _ => return Err(refuse("there is no rook in the corner")),
    }

    if side.between(mover).iter().any(|&sq| board.is_occupied(sq)) {
        return Err(refuse("pieces stand between king and rook"));
    }

    if is_in_check(board, mover)? {
        return Err(refuse("the king is in check"));
    }

    if side
        .king_path(mover)
        .iter()
        .any(|&sq| is_square_attacked(board, sq, mover.opposite()))
    {
        return Err(refuse("the king would pass through or land on an attacked square"));
    }

    Ok(())
}

/// Returns the square an en passant target was passed over by `last`,
/// if `last` was a pawn double step.
pub fn en_passant_target(last: &Move) -> Option<Square> {
    if !last.is_double_step() {
        return None;
    }
    let row = (last.from.row() + last.to.row()) / 2;
    Square::new(row, last.from.col())
}

/// Returns the square of the pawn captured if `from -> to` is an en passant
/// capture against the current `target`.
///
/// The capturing pawn must step diagonally forward onto the (empty) target
/// square, and an enemy pawn must stand beside it on the capturing pawn's row.
pub fn en_passant_victim(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    target: Option<Square>,
) -> Option<Square> {
    let target = target?;
    if to != target || board.is_occupied(to) {
        return None;
    }
    let piece = board.piece_at(from)?;
    if piece.kind != PieceKind::Pawn || piece.color != mover {
        return None;
    }
    let (dr, dc) = from.delta_to(to);
    if dr != mover.pawn_direction() || dc.abs() != 1 {
        return None;
    }
    let victim = from.on_file_of(to);
    match board.piece_at(victim) {
        Some(p) if p.kind == PieceKind::Pawn && p.color == mover.opposite() => Some(victim),
        _ => None,
    }
}

/// Returns true if `piece` arriving on `to` must promote.
#[inline]
pub fn reaches_promotion_row(piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
}

/// Accepts a promotion choice, rejecting King and Pawn.
pub fn check_promotion_choice(kind: PieceKind) -> Result<PieceKind, GameError> {
    if kind.is_promotion_choice() {
        Ok(kind)
    } else {
        Err(GameError::InvalidPromotionChoice(kind))
    }
}

/// Applies a classified move to a copy of `board` and returns the copy.
///
/// The moved piece (and the castling rook) come out with `has_moved` set.
/// A promoted piece replaces the pawn outright.
pub fn make_move(board: &Board, mv: &Move) -> Board {
    let mut next = *board;

    match mv.flag {
        MoveFlag::Castle(side) => {
            step(&mut next, mv.from, mv.to);
            step(
                &mut next,
                side.rook_home(mv.mover),
                side.rook_target(mv.mover),
            );
        }
        MoveFlag::EnPassant => {
            next.remove_piece(mv.from.on_file_of(mv.to));
            step(&mut next, mv.from, mv.to);
        }
        MoveFlag::Promotion(kind) => {
            if let Some(pawn) = next.remove_piece(mv.from) {
                let promoted = Piece {
                    kind,
                    color: pawn.color,
                    has_moved: true,
                };
                next.place_piece(mv.to, promoted);
            }
        }
        MoveFlag::Normal | MoveFlag::Capture => step(&mut next, mv.from, mv.to),
    }

    next
}

/// Moves a piece and marks it as having moved.
fn step(board: &mut Board, from: Square, to: Square) {
    if let Some(mut piece) = board.remove_piece(from) {
        piece.has_moved = true;
        board.place_piece(to, piece);
    }
}
