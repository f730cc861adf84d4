//! Move count invariant: one history entry per occupied cell.

use super::Invariant;
use crate::types::GameState;

/// Invariant: move count equals the number of occupied cells.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.move_count() == state.board().occupied_count() && state.move_count() <= 9
    }

    fn description() -> &'static str {
        "Move count matches number of occupied cells"
    }
}
