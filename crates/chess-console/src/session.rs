//! The interactive play loop.
//!
//! Reads commands line by line, hands moves to the engine, and redraws the
//! board after every accepted move. Recoverable errors re-prompt the same
//! player; a broken board invariant ends the session.

use crate::config::ConsoleConfig;
use crate::input::{parse_command, Command, HELP};
use crate::render::render_board;
use chess_core::{Color, Move};
use chess_engine::{GameError, GameState, GameStatus};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("game aborted: {0}")]
    Aborted(GameError),
}

/// Plays `game` using `input` and `output` until it ends, the players quit,
/// or input runs out. Returns the final game state.
pub fn run<R, W>(
    mut game: GameState,
    config: &ConsoleConfig,
    input: R,
    mut output: W,
) -> Result<GameState, SessionError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Hello, welcome to our chess game!")?;
    writeln!(output, "Type 'help' for instructions.")?;
    show_board(&game, config, &mut output)?;

    let mut lines = input.lines();
    while !game.status().is_terminal() {
        write!(output, "{}, enter your move: ", player_name(game.turn()))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "Not valid! {}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => write!(output, "{}", HELP)?,
            Command::History => write_history(game.history(), &mut output)?,
            Command::Draw => {
                if let Ok(status) = game.agree_draw() {
                    announce(status, &mut output)?;
                }
            }
            Command::Move {
                from,
                to,
                promotion,
            } => match game.submit_move(from, to, promotion) {
                Ok(outcome) => {
                    writeln!(output, "{} played {}", player_name(outcome.mv.mover), outcome.mv)?;
                    show_board(&game, config, &mut output)?;
                    announce(outcome.status, &mut output)?;
                }
                Err(e) if e.is_fatal() => return Err(SessionError::Aborted(e)),
                Err(e) => writeln!(output, "Not valid! {}", e)?,
            },
        }
    }

    if config.print_history {
        write_history(game.history(), &mut output)?;
    }
    Ok(game)
}

fn player_name(color: Color) -> &'static str {
    match color {
        Color::White => "Player 1 (white)",
        Color::Black => "Player 2 (black)",
    }
}

fn show_board<W: Write>(game: &GameState, config: &ConsoleConfig, output: &mut W) -> io::Result<()> {
    let perspective = if config.flip_for_black {
        game.turn()
    } else {
        Color::White
    };
    write!(
        output,
        "{}",
        render_board(game.board(), perspective, config.empty_square)
    )
}

fn announce<W: Write>(status: GameStatus, output: &mut W) -> io::Result<()> {
    match status {
        GameStatus::InProgress => Ok(()),
        GameStatus::Check(color) => writeln!(output, "{} is in check!", color),
        GameStatus::Checkmate(winner) => writeln!(output, "Checkmate! {} wins.", winner),
        GameStatus::Stalemate => writeln!(output, "Stalemate. The game is drawn."),
        GameStatus::Draw(reason) => writeln!(output, "The game is drawn by {}.", reason),
    }
}

/// Prints the moves as numbered pairs, one full move per line.
fn write_history<W: Write>(history: &[Move], output: &mut W) -> io::Result<()> {
    writeln!(output, "Move history:")?;
    if history.is_empty() {
        return writeln!(output, "  (no moves)");
    }
    // A game loaded from FEN may start with Black to move.
    let offset = usize::from(history[0].mover == Color::Black);
    let mut number = 1;
    let mut line = String::new();
    for (i, mv) in history.iter().enumerate() {
        if (i + offset) % 2 == 0 {
            line = format!("{:>3}. {}", number, mv);
        } else {
            if line.is_empty() {
                line = format!("{:>3}. ...", number);
            }
            writeln!(output, "{} {}", line, mv)?;
            line.clear();
            number += 1;
        }
    }
    if !line.is_empty() {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
