//! ASCII board rendering.

use chess_core::{Color, Square};
use chess_engine::Board;
use std::fmt;

/// A board as seen from one side of the table.
///
/// From White's side rank 8 is on top and files run a to h; from Black's
/// side both are reversed.
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub perspective: Color,
    pub empty: char,
}

impl BoardView<'_> {
    fn indices(&self) -> Vec<u8> {
        match self.perspective {
            Color::White => (0..8).collect(),
            Color::Black => (0..8).rev().collect(),
        }
    }

    fn write_files(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in self.indices() {
            write!(f, " {}", char::from(b'a' + col))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        self.write_files(f)?;
        writeln!(f)?;
        for row in self.indices() {
            let rank = 8 - row;
            write!(f, "{}  ", rank)?;
            for col in self.indices() {
                let symbol = Square::new(row, col)
                    .and_then(|sq| self.board.piece_at(sq))
                    .map_or(self.empty, |p| p.symbol());
                write!(f, "{} ", symbol)?;
            }
            writeln!(f, " {}", rank)?;
        }
        writeln!(f)?;
        self.write_files(f)?;
        writeln!(f)
    }
}

/// Renders `board` as seen by `perspective`, with file letters above and
/// below and rank numbers on both sides.
pub fn render_board(board: &Board, perspective: Color, empty: char) -> String {
    BoardView {
        board,
        perspective,
        empty,
    }
    .to_string()
}
