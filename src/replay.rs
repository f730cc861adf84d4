//! Replaying a scripted list of moves.

use derive_more::{Display, Error};
use std::io::Write;
use tabletop_engine::{GameEngine, MoveError, MoveOutcome};
use tracing::{info, instrument};

/// Parses a move list such as `"0,0 1,1 2,2"`.
///
/// Coordinates are not range-checked here; the engine decides what is on
/// the board.
#[instrument]
pub fn parse_moves(text: &str) -> Result<Vec<(i32, i32)>, ReplayError> {
    text.split_whitespace()
        .map(|token| -> Result<(i32, i32), ReplayError> {
            let (row, col) = token
                .split_once(',')
                .ok_or_else(|| ReplayError::Parse(token.to_string()))?;
            let row = row.parse().map_err(|_| ReplayError::Parse(token.to_string()))?;
            let col = col.parse().map_err(|_| ReplayError::Parse(token.to_string()))?;
            Ok((row, col))
        })
        .collect()
}

/// Replay failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token was not `row,col`.
    #[display("Expected `row,col`, got {:?}", _0)]
    Parse(#[error(not(source))] String),
    /// The engine rejected a move.
    #[display("Move {} ({}, {}) rejected: {}", index, row, col, source)]
    Rejected {
        /// 1-based position in the list.
        index: usize,
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// The engine's reason.
        source: MoveError,
    },
    /// Output could not be written.
    #[display("Failed to write replay output: {}", _0)]
    Output(#[error(not(source))] String),
}

/// Applies `moves` to `engine`, writing each outcome to `out`.
///
/// With `json`, every outcome is written as one JSON object per line;
/// otherwise as text, followed by the final board.
#[instrument(skip(engine, out))]
pub fn replay<W: Write>(
    engine: &mut GameEngine,
    moves: &[(i32, i32)],
    json: bool,
    out: &mut W,
) -> Result<Vec<MoveOutcome>, ReplayError> {
    let write_err = |e: std::io::Error| ReplayError::Output(e.to_string());
    let mut outcomes = Vec::with_capacity(moves.len());

    for (i, &(row, col)) in moves.iter().enumerate() {
        let outcome = engine
            .apply_move(row, col)
            .map_err(|source| ReplayError::Rejected {
                index: i + 1,
                row,
                col,
                source,
            })?;

        if json {
            let line = serde_json::to_string(&outcome)
                .map_err(|e| ReplayError::Output(e.to_string()))?;
            writeln!(out, "{line}").map_err(write_err)?;
        } else {
            writeln!(out, "{outcome}").map_err(write_err)?;
        }
        outcomes.push(outcome);
    }

    if !json {
        writeln!(out, "\n{}\n\n{}", engine.board().display(), engine.status()).map_err(write_err)?;
    }
    info!(moves = outcomes.len(), status = %engine.status(), "Replay finished");
    Ok(outcomes)
}
