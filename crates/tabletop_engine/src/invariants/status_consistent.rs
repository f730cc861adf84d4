//! Status invariant: the stored status agrees with the board.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: status is what the rules derive from the board.
///
/// In particular, `InProgress` iff fewer than 9 moves and no complete line.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.status() == rules::status_of(state.board())
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}
