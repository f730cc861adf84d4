//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::lines::WinLine;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Occupant of a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a piece for this player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A cell on the board, addressed by row and column (each 0-2).
///
/// A `Cell` is always in bounds. Raw coordinates go through
/// [`Cell::try_new`], which rejects anything off the grid; deserializing
/// does the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Cell`].
#[derive(Deserialize)]
struct RawCell {
    row: i32,
    col: i32,
}

impl TryFrom<RawCell> for Cell {
    type Error = MoveError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::try_new(raw.row, raw.col)
    }
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// Builds a cell from constants known to be in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a cell from signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] unless both coordinates are in `0..=2`.
    #[instrument]
    pub fn try_new(row: i32, col: i32) -> Result<Self, MoveError> {
        if (0..3).contains(&row) && (0..3).contains(&col) {
            Ok(Self::at(row as u8, col as u8))
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Human-readable label for this cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl TryFrom<(i32, i32)> for Cell {
    type Error = MoveError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Cell::try_new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board, indexed directly by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the occupant of a cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.row()][cell.col()]
    }

    /// Sets the occupant of a cell.
    ///
    /// Does not enforce placement rules; the engine validates before calling.
    pub(crate) fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.row()][cell.col()] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Iterates over every cell with its occupant, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Square)> + '_ {
        Cell::ALL.into_iter().map(|cell| (cell, self.get(cell)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, sq)| *sq != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their `row,col` coordinates so a player can read
    /// off what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row][col] {
                    Square::Empty => format!("{row},{col}"),
                    Square::Occupied(player) => format!(" {player} "),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The line that won.
        line: WinLine,
    },
    /// Board filled with no line completed.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => write!(f, "Player {winner} wins ({line})"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Owned exclusively by [`crate::GameEngine`]; everyone else sees it through
/// shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) starting_player: Player,
    pub(crate) history: Vec<Cell>,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a fresh game with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            starting_player: first,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Turns keep alternating on the final move, so after the game ends
    /// this is the player who would have moved next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who moved first.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the cells played, in order.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}
