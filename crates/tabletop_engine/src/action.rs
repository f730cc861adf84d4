//! Move results and move errors.
//!
//! A [`MoveOutcome`] is the record handed to whoever draws the board after
//! each accepted move. It carries everything needed to place a piece and
//! play the matching cue, without giving access to engine state.

use crate::lines::WinLine;
use crate::types::{Cell, GameStatus, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveOutcome {
    /// Player who just moved.
    #[getter(copy)]
    player: Player,
    /// Cell the piece was placed in.
    #[getter(copy)]
    cell: Cell,
    /// Status after the move.
    #[getter(copy)]
    status: GameStatus,
    /// Number of moves made so far, including this one.
    #[getter(copy)]
    move_count: usize,
}

impl MoveOutcome {
    /// The winning line, if this move won the game.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.status.winning_line()
    }

    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} -> {}: {}",
            self.move_count, self.player, self.cell, self.status
        )
    }
}

/// Reason a move was rejected.
///
/// Rejections never change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates are off the 3x3 grid.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The cell already holds a piece.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),
}

impl std::error::Error for MoveError {}
