//! Contracts between the game session and the outside world.
//!
//! A [`Picker`] turns user input into [`HostEvent`]s; a [`Presenter`]
//! draws pieces and plays cues. The engine never talks to either one
//! directly; [`crate::TableSession`] sits in between.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tabletop_engine::{Board, Cell, GameStatus, Player};
use tracing::instrument;

/// Something the user did that the session should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// A pick landed on a board cell.
    CellSelected {
        /// Row of the picked cell.
        row: i32,
        /// Column of the picked cell.
        col: i32,
    },
    /// Start a fresh game.
    NewGame,
    /// Leave the table.
    Quit,
}

impl From<Cell> for HostEvent {
    fn from(cell: Cell) -> Self {
        HostEvent::CellSelected {
            row: cell.row() as i32,
            col: cell.col() as i32,
        }
    }
}

/// Sound or effect to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Cue {
    /// A piece was placed.
    #[display("move")]
    Move,
    /// The game was won.
    #[display("win")]
    Win,
    /// The game was drawn.
    #[display("draw")]
    Draw,
    /// A pick was refused.
    #[display("rejected")]
    Rejected,
}

/// Source of user input.
///
/// Implementations resolve pointer positions (or keystrokes, or lines of
/// text) to cells. Picks that miss the board are theirs to drop.
pub trait Picker {
    /// Blocks until the next event, or returns `None` once input is exhausted.
    fn next_event(&mut self) -> Option<HostEvent>;
}

/// Output side: whatever renders the table and plays sounds.
pub trait Presenter {
    /// Materializes a piece for `player` at `cell`.
    fn place_piece(&mut self, player: Player, cell: Cell) -> Result<(), PresentError>;

    /// Drops any hover highlight.
    fn clear_highlight(&mut self) -> Result<(), PresentError>;

    /// Plays a sound or effect.
    fn play_cue(&mut self, cue: Cue) -> Result<(), PresentError>;

    /// Shows the whole board.
    fn show_board(&mut self, board: &Board) -> Result<(), PresentError>;

    /// Announces whose turn it is.
    fn show_turn(&mut self, player: Player) -> Result<(), PresentError>;

    /// Shows the end-of-game result.
    fn show_result(&mut self, status: &GameStatus) -> Result<(), PresentError>;

    /// Asks the user to start a new game.
    fn prompt_new_game(&mut self) -> Result<(), PresentError>;

    /// Removes all pieces for a new game that `first` opens.
    fn clear_board(&mut self, first: Player) -> Result<(), PresentError>;
}

/// Presenter failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Presenter error: {} at {}:{}", message, file, line)]
pub struct PresentError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PresentError {
    /// Creates a new presenter error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PresentError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
