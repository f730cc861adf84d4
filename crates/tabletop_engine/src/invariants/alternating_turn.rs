//! Alternating turn invariant: the player to move follows from the history.

use super::Invariant;
use crate::types::GameState;

/// Invariant: players alternate turns starting from the starting player.
///
/// After an even number of moves the starting player is to move, after an
/// odd number the opponent is. This holds after the game ends too.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.move_count() % 2 == 0 {
            state.starting_player()
        } else {
            state.starting_player().opponent()
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns from the starting player"
    }
}
