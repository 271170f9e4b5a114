//! Parsing of what the players type.

use chess_core::{parse_coordinate_move, PieceKind, Square, SquareError};
use thiserror::Error;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move a piece, e.g. "e2 e4", "e2e4", "e7e8q" or "e7 e8 q".
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    /// Show the moves played so far.
    History,
    /// Both players agree to a draw.
    Draw,
    /// Show the help text.
    Help,
    /// Leave the game.
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter a move such as e2e4, or 'help'")]
    Empty,
    #[error(transparent)]
    Notation(#[from] SquareError),
}

/// Parses one line of input. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "history" => Ok(Command::History),
        "draw" => Ok(Command::Draw),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => {
            let (from, to, promotion) = parse_coordinate_move(trimmed)?;
            Ok(Command::Move {
                from,
                to,
                promotion,
            })
        }
    }
}

pub const HELP: &str = "\
Enter moves as source and target squares: e2 e4 or e2e4.
When a pawn reaches the last rank, add the piece it becomes: e7e8q (q, r, b or n).
Castle by moving the king two squares: e1g1 or e1c1.

Commands:
  history   show the moves played so far
  draw      end the game as a draw by agreement
  help      show this text
  quit      leave the game
";
