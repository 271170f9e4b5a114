//! Chess Console - two players sharing one terminal.
//!
//! Moves are typed in coordinate notation; the board is redrawn after each
//! accepted move and the move history is printed when the game ends.

mod config;
mod input;
mod render;
mod session;

use chess_engine::GameState;
use clap::Parser;
use config::ConsoleConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess Console - play a two-player game of chess at the terminal.
#[derive(Parser)]
#[command(name = "chess-console")]
#[command(about = "Play a two-player game of chess at the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Start from this position instead of the standard one
    #[arg(long)]
    fen: Option<String>,

    /// Log engine decisions to stderr (otherwise RUST_LOG decides, default warn)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig::load(&args.config)?;
    tracing::debug!("Config: {:?}", config);

    let game = match &args.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let game = session::run(game, &config, stdin.lock(), stdout.lock())?;
    tracing::info!("Session ended: {}", game.status());
    Ok(())
}

fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
