//! Non-interactive replay of a move list.

use crate::app::status_line;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fmt::Write;
use tictactoe::{Engine, Position, TurnOutcome};
use tracing::{info, instrument};

/// Plays `moves` on a fresh engine and renders the result.
///
/// Each move is reported on its own line, followed by the final board and
/// status. With `json` set, only the final [`tictactoe::GameView`] is
/// rendered.
///
/// # Errors
///
/// Fails on the first index outside 0-8.
#[instrument(skip(config))]
pub fn replay(config: &Config, moves: &[usize], json: bool) -> Result<String> {
    let mut engine = Engine::with_players(config.player_a().as_str(), config.player_b().as_str());
    let mut out = String::new();

    for (turn, &index) in moves.iter().enumerate() {
        let player = engine.current_player().clone();
        let outcome = engine
            .play_turn(index)
            .with_context(|| format!("Move {} rejected", turn + 1))?;
        let result = match outcome {
            TurnOutcome::Accepted(_) => "placed",
            TurnOutcome::RejectedOccupied => "spot already taken",
            TurnOutcome::RejectedGameOver => "ignored, game over",
        };
        let label = Position::from_index(index).map_or("?", |p| p.label());
        writeln!(
            out,
            "{:>2}. {} ({}) -> {} [{}]: {}",
            turn + 1,
            player.name(),
            player.mark(),
            index,
            label,
            result
        )?;
    }
    info!(moves = moves.len(), status = ?engine.status(), "Replay finished");

    if json {
        return Ok(serde_json::to_string_pretty(&engine.view())?);
    }
    writeln!(out, "\n{}\n", engine.board())?;
    write!(out, "{}", status_line(&engine))?;
    Ok(out)
}
