//! Move representation.

use crate::{Color, PieceKind, Square, SquareError};
use std::fmt;

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Towards the h-file (O-O).
    Kingside,
    /// Towards the a-file (O-O-O).
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Square the king of `color` starts on.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Square the king lands on.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::G1,
            (CastleSide::Queenside, Color::White) => Square::C1,
            (CastleSide::Kingside, Color::Black) => Square::G8,
            (CastleSide::Queenside, Color::Black) => Square::C8,
        }
    }

    /// Corner the rook starts in.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::H1,
            (CastleSide::Queenside, Color::White) => Square::A1,
            (CastleSide::Kingside, Color::Black) => Square::H8,
            (CastleSide::Queenside, Color::Black) => Square::A8,
        }
    }

    /// Square the rook lands on (next to the king, on the inside).
    #[inline]
    pub const fn rook_target(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::F1,
            (CastleSide::Queenside, Color::White) => Square::D1,
            (CastleSide::Kingside, Color::Black) => Square::F8,
            (CastleSide::Queenside, Color::Black) => Square::D8,
        }
    }

    /// Squares that must be empty between king and rook.
    pub const fn between(self, color: Color) -> &'static [Square] {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => &[Square::F1, Square::G1],
            (CastleSide::Queenside, Color::White) => &[Square::B1, Square::C1, Square::D1],
            (CastleSide::Kingside, Color::Black) => &[Square::F8, Square::G8],
            (CastleSide::Queenside, Color::Black) => &[Square::B8, Square::C8, Square::D8],
        }
    }

    /// Squares the king crosses, ending with the one it lands on.
    pub const fn king_path(self, color: Color) -> &'static [Square] {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => &[Square::F1, Square::G1],
            (CastleSide::Queenside, Color::White) => &[Square::D1, Square::C1],
            (CastleSide::Kingside, Color::Black) => &[Square::F8, Square::G8],
            (CastleSide::Queenside, Color::Black) => &[Square::D8, Square::C8],
        }
    }
}

/// Classification of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    /// Quiet move onto an empty square.
    Normal,
    /// Captures the piece standing on the destination square.
    Capture,
    /// King and rook move together.
    Castle(CastleSide),
    /// Pawn captures the pawn that just passed it with a double step.
    EnPassant,
    /// Pawn reaches the last row and becomes the given kind.
    Promotion(PieceKind),
}

impl MoveFlag {
    /// Returns the promotion piece if this is a promotion move.
    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            MoveFlag::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::Castle(_))
    }
}

/// A committed chess move.
///
/// Records are built once by the engine and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub mover: Color,
    /// Kind of the piece that left `from` (a promoting pawn is `Pawn`).
    pub piece: PieceKind,
    pub flag: MoveFlag,
    /// Kind of the piece removed from the board, if any.
    pub captured: Option<PieceKind>,
}

impl Move {
    /// Returns true if a piece was taken by this move.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this was a pawn advancing two rows.
    #[inline]
    pub fn is_double_step(&self) -> bool {
        matches!(self.piece, PieceKind::Pawn) && self.from.delta_to(self.to).0.abs() == 2
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_notation(&self) -> String {
        match self.flag.promotion_piece() {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.letter()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flag {
            MoveFlag::Castle(CastleSide::Kingside) => write!(f, "O-O"),
            MoveFlag::Castle(CastleSide::Queenside) => write!(f, "O-O-O"),
            _ => {
                let sep = if self.is_capture() { 'x' } else { '-' };
                write!(f, "{}{}{}", self.from, sep, self.to)?;
                match self.flag {
                    MoveFlag::EnPassant => write!(f, " e.p."),
                    MoveFlag::Promotion(kind) => {
                        write!(f, "={}", kind.letter().to_ascii_uppercase())
                    }
                    _ => Ok(()),
                }
            }
        }
    }
}

/// Parses coordinate notation such as "e2e4", "e2 e4", "e7e8q" or "e7 e8 q".
///
/// Returns the source, destination, and optional promotion letter. The
/// promotion kind is returned as written; deciding whether it is a legal
/// choice is up to the engine.
pub fn parse_coordinate_move(s: &str) -> Result<(Square, Square, Option<PieceKind>), SquareError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != 4 && compact.len() != 5 {
        return Err(SquareError::InvalidNotation(s.trim().to_string()));
    }
    if !compact.is_ascii() {
        return Err(SquareError::InvalidNotation(s.trim().to_string()));
    }
    let from = Square::from_algebraic(&compact[0..2])?;
    let to = Square::from_algebraic(&compact[2..4])?;
    let promotion = match compact[4..].chars().next() {
        Some(c) => Some(
            PieceKind::from_letter(c)
                .ok_or_else(|| SquareError::InvalidNotation(s.trim().to_string()))?,
        ),
        None => None,
    };
    Ok((from, to, promotion))
}
