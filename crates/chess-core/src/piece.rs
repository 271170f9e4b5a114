//! Chess piece representation.

use crate::Color;
use std::fmt;

/// Orthogonal ray directions as (row, col) deltas.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions as (row, col) deltas.
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Union of orthogonal and diagonal directions.
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece types in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// The kinds a pawn may promote to, strongest first.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the lowercase letter used for this kind in notation.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses a notation letter (either case) into a kind.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if this piece is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if a pawn may be promoted to this kind.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Returns the movement templates for this kind when played by `color`.
    pub fn movement(self, color: Color) -> Movement {
        match self {
            PieceKind::Pawn => Movement::Pawn {
                forward: color.pawn_direction(),
            },
            PieceKind::Knight => Movement::Leap(&KNIGHT_OFFSETS),
            PieceKind::Bishop => Movement::Slide(&DIAGONAL),
            PieceKind::Rook => Movement::Slide(&ORTHOGONAL),
            PieceKind::Queen => Movement::Slide(&ALL_DIRECTIONS),
            PieceKind::King => Movement::Leap(&ALL_DIRECTIONS),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// Movement templates of a piece kind.
///
/// Sliding templates are unit directions repeated until the board edge or the
/// first occupied square. Leaping templates are fixed offsets that ignore any
/// piece in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Rays in each listed direction.
    Slide(&'static [(i8, i8)]),
    /// Single jumps by each listed offset.
    Leap(&'static [(i8, i8)]),
    /// Forward pushes and diagonal captures along `forward` rows.
    Pawn { forward: i8 },
}

impl Movement {
    /// Returns true if `delta` is reachable in one move under these templates,
    /// ignoring occupancy. Pawn templates cover the single push, the double
    /// push and both diagonal captures.
    pub fn matches(self, delta: (i8, i8)) -> bool {
        let (dr, dc) = delta;
        if delta == (0, 0) {
            return false;
        }
        match self {
            Movement::Leap(offsets) => offsets.contains(&delta),
            Movement::Slide(directions) => {
                let step = (dr.signum(), dc.signum());
                let aligned = dr == 0 || dc == 0 || dr.abs() == dc.abs();
                aligned && directions.contains(&step)
            }
            Movement::Pawn { forward } => {
                (dc == 0 && (dr == forward || dr == 2 * forward))
                    || (dc.abs() == 1 && dr == forward)
            }
        }
    }
}

/// A piece on the board.
///
/// `has_moved` flips to true the first time the piece leaves its square and
/// never goes back, which is what castling eligibility reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Returns the board symbol: uppercase for White, lowercase for Black.
    pub const fn symbol(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a board symbol into an unmoved piece.
    pub const fn from_symbol(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceKind::from_letter(c) {
            Some(kind) => Some(Piece::new(kind, color)),
            None => None,
        }
    }

    /// Returns this piece's movement templates.
    #[inline]
    pub fn movement(self) -> Movement {
        self.kind.movement(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
