//! FEN (Forsyth-Edwards Notation) loading and export.
//!
//! The board keeps no castling rights of its own; they are expressed through
//! `has_moved` on kings and rooks. Loading maps each right onto an unmoved
//! king and rook on their home squares, and export derives the rights back
//! from the same flags.

use crate::check::is_in_check;
use crate::Board;
use chess_core::{CastleSide, Color, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),

    #[error("illegal position: {0}")]
    IllegalPosition(String),
}

/// The standard starting position FEN.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything a FEN record describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub turn: Color,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Parses a full FEN record.
///
/// The halfmove clock and fullmove number may be omitted and default to
/// 0 and 1. Positions without exactly one king per side, with pawns on a
/// back row, or where the side not to move is in check are rejected.
pub fn parse(fen: &str) -> Result<FenPosition, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&parts.len()) {
        return Err(FenError::InvalidPartCount(parts.len()));
    }

    let mut board = Board::from_fen_placement(parts[0])?;

    let turn = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidActiveColor(other.to_string())),
    };

    apply_castling_rights(&mut board, parts[2])?;
    let en_passant = parse_en_passant(parts[3], turn)?;

    let halfmove_clock = match parts.get(4) {
        Some(s) => s
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(s.to_string()))?,
        None => 0,
    };
    let fullmove_number = match parts.get(5) {
        Some(s) => match s.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(FenError::InvalidFullmoveNumber(s.to_string())),
        },
        None => 1,
    };

    check_position(&board, turn)?;

    Ok(FenPosition {
        board,
        turn,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

/// Renders a FEN record.
pub fn to_fen(position: &FenPosition) -> String {
    let turn = match position.turn {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let en_passant = position
        .en_passant
        .map(|sq| sq.to_algebraic())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} {} {} {} {} {}",
        position.board.to_fen_placement(),
        turn,
        castling_rights(&position.board),
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

impl Board {
    /// Builds a board from the piece placement field of a FEN record.
    ///
    /// Every piece comes out unmoved except pawns standing off their starting
    /// row. Kings and rooks are marked moved later if no castling right
    /// covers them.
    pub fn from_fen_placement(placement: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u32;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip;
                    continue;
                }
                let mut piece = Piece::from_symbol(c).ok_or_else(|| {
                    FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    ))
                })?;
                let sq = Square::new(row as u8, col as u8).ok_or_else(|| {
                    FenError::InvalidPiecePlacement(format!("rank {} is too long", 8 - row))
                })?;
                if piece.kind == PieceKind::Pawn {
                    piece.has_moved = sq.row() != piece.color.pawn_row();
                }
                board.place_piece(sq, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }
        Ok(board)
    }

    /// Renders the piece placement field of a FEN record.
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in 0..8u8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8u8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

const CASTLING_LETTERS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::Kingside),
    ('Q', Color::White, CastleSide::Queenside),
    ('k', Color::Black, CastleSide::Kingside),
    ('q', Color::Black, CastleSide::Queenside),
];

fn home_squares(color: Color, side: CastleSide) -> (Square, Square) {
    (CastleSide::king_home(color), side.rook_home(color))
}

fn unmoved(board: &Board, sq: Square, kind: PieceKind, color: Color) -> bool {
    board
        .piece_at(sq)
        .map_or(false, |p| p.kind == kind && p.color == color && !p.has_moved)
}

fn apply_castling_rights(board: &mut Board, field: &str) -> Result<(), FenError> {
    let mut rights = Vec::new();
    if field != "-" {
        for c in field.chars() {
            let right = CASTLING_LETTERS
                .iter()
                .find(|(letter, _, _)| *letter == c)
                .ok_or_else(|| {
                    FenError::InvalidCastlingRights(format!("invalid character '{}'", c))
                })?;
            let (king, rook) = home_squares(right.1, right.2);
            if !unmoved(board, king, PieceKind::King, right.1)
                || !unmoved(board, rook, PieceKind::Rook, right.1)
            {
                return Err(FenError::InvalidCastlingRights(format!(
                    "'{}' without king and rook on their home squares",
                    c
                )));
            }
            rights.push((right.1, right.2));
        }
    }

    let marks: Vec<Square> = board
        .pieces()
        .filter(|(sq, p)| match p.kind {
            PieceKind::King => !rights
                .iter()
                .any(|&(color, side)| color == p.color && home_squares(color, side).0 == *sq),
            PieceKind::Rook => !rights
                .iter()
                .any(|&(color, side)| color == p.color && home_squares(color, side).1 == *sq),
            _ => false,
        })
        .map(|(sq, _)| sq)
        .collect();

    for sq in marks {
        if let Some(mut piece) = board.remove_piece(sq) {
            piece.has_moved = true;
            board.place_piece(sq, piece);
        }
    }
    Ok(())
}

fn castling_rights(board: &Board) -> String {
    let rights: String = CASTLING_LETTERS
        .iter()
        .filter(|&&(_, color, side)| {
            let (king, rook) = home_squares(color, side);
            unmoved(board, king, PieceKind::King, color) && unmoved(board, rook, PieceKind::Rook, color)
        })
        .map(|&(letter, _, _)| letter)
        .collect();
    if rights.is_empty() {
        "-".to_string()
    } else {
        rights
    }
}

fn parse_en_passant(field: &str, turn: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let sq = Square::from_algebraic(field)
        .map_err(|_| FenError::InvalidEnPassantSquare(field.to_string()))?;
    // The passed-over square sits one row behind the pawn that just moved.
    let expected_row = (turn.opposite().pawn_row() as i8 + turn.opposite().pawn_direction()) as u8;
    if sq.row() != expected_row {
        return Err(FenError::InvalidEnPassantSquare(field.to_string()));
    }
    Ok(Some(sq))
}

fn check_position(board: &Board, turn: Color) -> Result<(), FenError> {
    for color in Color::ALL {
        board
            .find_king(color)
            .map_err(|_| FenError::IllegalPosition(format!("{} must have exactly one king", color)))?;
    }
    let stray_pawn = board
        .pieces()
        .any(|(sq, p)| p.kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7));
    if stray_pawn {
        return Err(FenError::IllegalPosition("pawn on a back row".to_string()));
    }
    let waiting = turn.opposite();
    if is_in_check(board, waiting).unwrap_or(false) {
        return Err(FenError::IllegalPosition(format!(
            "{} is in check but it is not their move",
            waiting
        )));
    }
    Ok(())
}
