//! Win detection logic for tic-tac-toe.

use crate::lines::WinLine;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the player and the first complete line in [`WinLine::ALL`]
/// order, or `None` when no line is uniformly occupied.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}
