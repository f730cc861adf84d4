//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the status a board is in.
///
/// Win detection always runs first, so a move that both fills the board
/// and completes a line is a win, not a draw.
#[instrument(skip(board))]
pub fn status_of(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
