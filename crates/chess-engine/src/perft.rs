//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate move generation,
//! including castling, en passant, promotion and pins.

use crate::check::legal_moves;
use crate::{GameError, GameState};

/// Counts the number of leaf nodes at the given depth.
///
/// Draw rules are ignored; only checkmate and stalemate end a line early.
pub fn perft(game: &GameState, depth: u32) -> Result<u64, GameError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(game.board(), game.turn(), game.en_passant_target())?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut next = game.clone();
        next.commit(mv)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft with divide - node count below each root move, sorted by notation.
pub fn perft_divide(game: &GameState, depth: u32) -> Result<Vec<(String, u64)>, GameError> {
    let moves = legal_moves(game.board(), game.turn(), game.en_passant_target())?;
    let mut results = Vec::with_capacity(moves.len());

    for mv in moves {
        let mut next = game.clone();
        next.commit(mv)?;
        let nodes = if depth > 1 {
            perft(&next, depth - 1)?
        } else {
            1
        };
        results.push((mv.to_notation(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
