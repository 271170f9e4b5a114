//! Turning a raw `from -> to` request into a classified [`Move`].

use crate::special::{
    castle_side, check_castling, check_promotion_choice, en_passant_victim,
    reaches_promotion_row,
};
use crate::validator::validate;
use crate::{Board, GameError};
use chess_core::{Move, MoveFlag, PieceKind, Square};

/// Classifies the request to move the piece on `from` to `to`.
///
/// The mover is whoever owns the piece on `from`; turn order is the caller's
/// concern. The result is pseudo-legal: whether it leaves the mover's king in
/// check is not examined here, except that castling refuses to start from,
/// pass through, or land on an attacked square.
///
/// A `promotion` choice is required when a pawn reaches its last row and is
/// ignored otherwise, though a King or Pawn choice is always rejected.
pub fn resolve_move(
    board: &Board,
    en_passant: Option<Square>,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, GameError> {
    let piece = *board
        .piece_at(from)
        .ok_or(GameError::NoPieceAtSource(from))?;
    let mover = piece.color;
    let promotion = promotion.map(check_promotion_choice).transpose()?;

    let mv = |flag: MoveFlag, captured: Option<PieceKind>| Move {
        from,
        to,
        mover,
        piece: piece.kind,
        flag,
        captured,
    };

    if let Some(side) = castle_side(board, from, to, mover) {
        check_castling(board, mover, side)?;
        return Ok(mv(MoveFlag::Castle(side), None));
    }

    if en_passant_victim(board, from, to, mover, en_passant).is_some() {
        return Ok(mv(MoveFlag::EnPassant, Some(PieceKind::Pawn)));
    }

    let flag = validate(board, from, to, mover)?;
    let captured = board.piece_at(to).map(|p| p.kind);

    if reaches_promotion_row(&piece, to) {
        return match promotion {
            Some(kind) => Ok(mv(MoveFlag::Promotion(kind), captured)),
            None => Err(GameError::PromotionChoiceRequired(format!("{}{}", from, to))),
        };
    }

    Ok(mv(flag, captured))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{CastleSide, Color, Piece};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn board_from(pieces: &[(&str, char)]) -> Board {
        let mut board = Board::empty();
        for &(at, symbol) in pieces {
            board.place_piece(sq(at), Piece::from_symbol(symbol).unwrap());
        }
        board
    }

    #[test]
    fn plain_and_capturing_moves() {
        let board = Board::standard();
        let mv = resolve_move(&board, None, sq("e2"), sq("e4"), None).unwrap();
        assert_eq!(mv.flag, MoveFlag::Normal);
        assert_eq!(mv.mover, Color::White);
        assert_eq!(mv.piece, PieceKind::Pawn);
        assert_eq!(mv.captured, None);

        let board = board_from(&[("e1", 'K'), ("e8", 'k'), ("d4", 'N'), ("c6", 'b')]);
        let mv = resolve_move(&board, None, sq("d4"), sq("c6"), None).unwrap();
        assert_eq!(mv.flag, MoveFlag::Capture);
        assert_eq!(mv.captured, Some(PieceKind::Bishop));
    }

    #[test]
    fn empty_source() {
        let board = Board::standard();
        assert_eq!(
            resolve_move(&board, None, sq("e4"), sq("e5"), None),
            Err(GameError::NoPieceAtSource(sq("e4")))
        );
    }

    #[test]
    fn castling_is_classified() {
        let board = board_from(&[("e1", 'K'), ("h1", 'R'), ("e8", 'k')]);
        let mv = resolve_move(&board, None, Square::E1, Square::G1, None).unwrap();
        assert_eq!(mv.flag, MoveFlag::Castle(CastleSide::Kingside));
        assert!(matches!(
            resolve_move(&board, None, Square::E1, Square::C1, None),
            Err(GameError::IllegalMove(_))
        ));
    }

    #[test]
    fn en_passant_is_classified() {
        let board = board_from(&[("e1", 'K'), ("e8", 'k'), ("e5", 'P'), ("f5", 'p')]);
        let mv = resolve_move(&board, Some(sq("f6")), sq("e5"), sq("f6"), None).unwrap();
        assert_eq!(mv.flag, MoveFlag::EnPassant);
        assert_eq!(mv.captured, Some(PieceKind::Pawn));

        assert!(resolve_move(&board, None, sq("e5"), sq("f6"), None).is_err());
    }

    #[test]
    fn promotion_needs_a_valid_choice() {
        let board = board_from(&[("e1", 'K'), ("h8", 'k'), ("a7", 'P')]);
        assert!(matches!(
            resolve_move(&board, None, sq("a7"), sq("a8"), None),
            Err(GameError::PromotionChoiceRequired(_))
        ));
        assert_eq!(
            resolve_move(&board, None, sq("a7"), sq("a8"), Some(PieceKind::King)),
            Err(GameError::InvalidPromotionChoice(PieceKind::King))
        );
        let mv = resolve_move(&board, None, sq("a7"), sq("a8"), Some(PieceKind::Rook)).unwrap();
        assert_eq!(mv.flag, MoveFlag::Promotion(PieceKind::Rook));
    }

    #[test]
    fn choice_on_ordinary_move_is_ignored_unless_invalid() {
        let board = Board::standard();
        let mv = resolve_move(&board, None, sq("e2"), sq("e4"), Some(PieceKind::Queen)).unwrap();
        assert_eq!(mv.flag, MoveFlag::Normal);
        assert_eq!(
            resolve_move(&board, None, sq("e2"), sq("e4"), Some(PieceKind::Pawn)),
            Err(GameError::InvalidPromotionChoice(PieceKind::Pawn))
        );
    }
}
