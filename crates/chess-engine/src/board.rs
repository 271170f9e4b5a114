//! The 8x8 board container.
//!
//! [`Board`] owns every piece in the game through one optional slot per
//! square. It performs no rule checking at all; legality lives in the
//! validator, check detector and special-move handler.

use crate::GameError;
use chess_core::{Color, Piece, PieceKind, Square};

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Creates the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Returns the slot at `(row, col)`.
    ///
    /// Fails with [`GameError::OutOfBounds`] when either index is off the board.
    pub fn get_square(&self, row: i32, col: i32) -> Result<Option<&Piece>, GameError> {
        let sq = Square::try_new(row, col)?;
        Ok(self.piece_at(sq))
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].as_ref()
    }

    #[inline]
    fn slot_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Puts `piece` on `sq`, returning whatever stood there before.
    pub fn place_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.slot_mut(sq).replace(piece)
    }

    /// Takes the piece off `sq`.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.slot_mut(sq).take()
    }

    /// Moves the occupant of `from` onto `to`, returning the displaced piece.
    ///
    /// An empty `from` leaves the board unchanged and returns `None`.
    pub fn transfer_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.remove_piece(from) {
            Some(piece) => self.place_piece(to, piece),
            None => None,
        }
    }

    /// Returns true if a piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Returns the color of the piece on `sq`, if any.
    #[inline]
    pub fn occupant_color(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Returns the kind and color on `sq` without the move bookkeeping.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<(PieceKind, Color)> {
        self.piece_at(sq).map(|p| (p.kind, p.color))
    }

    /// Iterates over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares and pieces belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Locates the king of `color`.
    ///
    /// Exactly one king per side must be on the board; anything else is an
    /// [`GameError::InvariantViolation`].
    pub fn find_king(&self, color: Color) -> Result<Square, GameError> {
        let mut kings = self
            .pieces_of(color)
            .filter(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq);
        match (kings.next(), kings.next()) {
            (Some(sq), None) => Ok(sq),
            (None, _) => Err(GameError::InvariantViolation(format!(
                "{} has no king",
                color
            ))),
            (Some(_), Some(_)) => Err(GameError::InvariantViolation(format!(
                "{} has more than one king",
                color
            ))),
        }
    }
}
