//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} apply_move {Q}`. Preconditions decide whether a move is accepted;
//! postconditions confirm the transition kept every invariant.

use crate::action::MoveError;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::types::{Cell, GameState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition yields for the transition to use.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: coordinates address a cell on the grid.
pub struct CellInBounds;

impl CellInBounds {
    /// Converts raw coordinates into a [`Cell`].
    #[instrument]
    pub fn check(row: i32, col: i32) -> Result<Cell, MoveError> {
        Cell::try_new(row, col).inspect_err(|_| {
            warn!(row, col, "Rejected off-board move");
        })
    }
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.status().is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    #[instrument(skip(state))]
    pub fn check(cell: Cell, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(cell))
        }
    }
}

/// Composite precondition, checked in order: bounds, game not over, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and returns the target cell.
    #[instrument(skip(state))]
    pub fn check(row: i32, col: i32, state: &GameState) -> Result<Cell, MoveError> {
        let cell = CellInBounds::check(row, col)?;
        GameNotOver::check(state)?;
        CellIsEmpty::check(cell, state)?;
        Ok(cell)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a piece at `(row, col)`.
///
/// Preconditions:
/// - Coordinates in range
/// - Game in progress
/// - Cell empty
///
/// Postconditions:
/// - Exactly one more move than before
/// - Every cell occupied before is unchanged
/// - All [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, (i32, i32)> for MoveContract {
    type Checked = Cell;

    fn pre(state: &GameState, &(row, col): &(i32, i32)) -> Result<Cell, MoveError> {
        LegalMove::check(row, col, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = EngineInvariants::check_all(after).err().unwrap_or_default();

        if after.move_count() != before.move_count() + 1 {
            violations.push(InvariantViolation::new(
                "A move adds exactly one history entry",
            ));
        }

        let preserved = before
            .board()
            .cells()
            .filter(|(_, sq)| sq.player().is_some())
            .all(|(cell, sq)| after.board().get(cell) == sq);
        if !preserved {
            violations.push(InvariantViolation::new(
                "Occupied cells are unchanged by later moves",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

/// Asserts the move contract's postcondition (panics on violation in debug builds).
#[instrument(skip(before, after))]
pub fn assert_invariants(before: &GameState, after: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = MoveContract::post(before, after)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Postcondition failed: {descriptions}");
    }
}
