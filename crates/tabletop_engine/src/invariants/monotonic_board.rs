//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: cells are monotonic (never overwritten).
///
/// Replays the history from the starting player onto an empty board. Every
/// step must land on an empty cell and the result must equal the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = state.starting_player();

        for &cell in state.history() {
            if !reconstructed.is_empty(cell) {
                return false;
            }
            reconstructed.set(cell, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
