//! Board coordinates.

use std::fmt;
use thiserror::Error;

/// Errors produced when building or parsing squares.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("invalid square notation: '{0}'")]
    InvalidNotation(String),
}

/// A square on the chess board addressed by row and column.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1. Column 0 is
/// the a-file and column 7 the h-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, returning `None` if either index is outside 0-7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Self, SquareError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidNotation(s.to_string()));
        }
        Ok(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Returns the row (0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square on this square's row and `other`'s column.
    #[inline]
    pub const fn on_file_of(self, other: Square) -> Square {
        Square {
            row: self.row,
            col: other.col,
        }
    }

    /// Returns the square displaced by `(dr, dc)`, if it is still on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the (row, col) delta from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns true if this is a light square.
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    // Squares the castling rules refer to
    pub const A1: Square = Square { row: 7, col: 0 };
    pub const B1: Square = Square { row: 7, col: 1 };
    pub const C1: Square = Square { row: 7, col: 2 };
    pub const D1: Square = Square { row: 7, col: 3 };
    pub const E1: Square = Square { row: 7, col: 4 };
    pub const F1: Square = Square { row: 7, col: 5 };
    pub const G1: Square = Square { row: 7, col: 6 };
    pub const H1: Square = Square { row: 7, col: 7 };
    pub const A8: Square = Square { row: 0, col: 0 };
    pub const B8: Square = Square { row: 0, col: 1 };
    pub const C8: Square = Square { row: 0, col: 2 };
    pub const D8: Square = Square { row: 0, col: 3 };
    pub const E8: Square = Square { row: 0, col: 4 };
    pub const F8: Square = Square { row: 0, col: 5 };
    pub const G8: Square = Square { row: 0, col: 6 };
    pub const H8: Square = Square { row: 0, col: 7 };
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl std::str::FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}
