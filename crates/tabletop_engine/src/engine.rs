//! The game engine: sole owner of the game state.
//!
//! Every change goes through [`GameEngine::apply_move`] or
//! [`GameEngine::reset`]. Rejected moves leave the state untouched.

use crate::action::{MoveError, MoveOutcome};
use crate::contracts::{Contract, MoveContract, assert_invariants};
use crate::lines::WinLine;
use crate::rules;
use crate::types::{Board, Cell, GameState, GameStatus, Player, Square};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who moves first in a new game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StartingPlayer {
    /// X always starts.
    #[default]
    X,
    /// O always starts.
    O,
    /// Coin flip from the engine's RNG at every reset.
    Random,
}

impl StartingPlayer {
    /// Picks the concrete starting player.
    pub fn resolve(self, rng: &mut impl Rng) -> Player {
        match self {
            StartingPlayer::X => Player::X,
            StartingPlayer::O => Player::O,
            StartingPlayer::Random => {
                if rng.gen_bool(0.5) {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }
}

impl From<Player> for StartingPlayer {
    fn from(player: Player) -> Self {
        match player {
            Player::X => StartingPlayer::X,
            Player::O => StartingPlayer::O,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board, turn order and status. Moves are validated in full
/// before anything is written, so there is no partially applied move.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    start: StartingPlayer,
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// Creates an engine with an entropy-seeded RNG.
    #[instrument]
    pub fn new(start: StartingPlayer) -> Self {
        Self::from_rng(start, ChaCha8Rng::from_entropy())
    }

    /// Creates an engine whose random starts are reproducible.
    #[instrument]
    pub fn with_seed(start: StartingPlayer, seed: u64) -> Self {
        Self::from_rng(start, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(start: StartingPlayer, mut rng: ChaCha8Rng) -> Self {
        let first = start.resolve(&mut rng);
        debug!(?start, %first, "New game");
        Self {
            state: GameState::new(first),
            start,
            rng,
        }
    }

    /// Places the current player's piece at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside `0..=2`
    /// - [`MoveError::GameAlreadyOver`] if the game was already won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a piece
    ///
    /// None of these modify the game.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        let cell = MoveContract::pre(&self.state, &(row, col)).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let before = self.state.clone();
        let player = self.state.current_player;

        self.state.board.set(cell, Square::Occupied(player));
        self.state.history.push(cell);
        self.state.status = rules::status_of(&self.state.board);
        self.state.current_player = player.opponent();

        assert_invariants(&before, &self.state);

        let outcome = MoveOutcome::new(player, cell, self.state.status, self.state.move_count());
        match outcome.status() {
            GameStatus::InProgress => debug!(%outcome, "Move accepted"),
            GameStatus::Won { winner, line } => info!(%winner, %line, "Game won"),
            GameStatus::Draw => info!(moves = outcome.move_count(), "Game drawn"),
        }
        Ok(outcome)
    }

    /// Places a piece at an already bounds-checked cell.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus `OutOfBounds`.
    pub fn place(&mut self, cell: Cell) -> Result<MoveOutcome, MoveError> {
        self.apply_move(cell.row() as i32, cell.col() as i32)
    }

    /// Returns the first complete line and its owner, if any.
    ///
    /// Lines are checked rows first, then columns, then diagonals.
    #[instrument(skip(self))]
    pub fn check_win(&self) -> Option<(Player, WinLine)> {
        rules::check_winner(&self.state.board)
    }

    /// True iff all 9 cells are filled and no line was completed.
    pub fn is_draw(&self) -> bool {
        self.state.move_count() == 9 && self.check_win().is_none()
    }

    /// Starts a new game, discarding the current one.
    ///
    /// `start` becomes the configured starting player for later
    /// [`GameEngine::restart`] calls.
    #[instrument(skip(self))]
    pub fn reset(&mut self, start: StartingPlayer) {
        self.start = start;
        let first = start.resolve(&mut self.rng);
        info!(
            %first,
            abandoned_moves = self.state.move_count(),
            "Game reset"
        );
        self.state = GameState::new(first);
    }

    /// Starts a new game with the configured starting player.
    pub fn restart(&mut self) {
        self.reset(self.start);
    }

    /// Builds an engine with `first` to move and applies `moves` in order.
    ///
    /// Returns the engine and the outcome of every move.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(
        first: Player,
        moves: &[(i32, i32)],
    ) -> Result<(Self, Vec<MoveOutcome>), MoveError> {
        let mut engine = Self::new(first.into());
        let outcomes = moves
            .iter()
            .map(|&(row, col)| engine.apply_move(row, col))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((engine, outcomes))
    }

    /// Empty cells in row-major order; empty once the game is over.
    pub fn valid_cells(&self) -> Vec<Cell> {
        if self.state.status.is_over() {
            return Vec::new();
        }
        self.state
            .board
            .cells()
            .filter(|(_, sq)| *sq == Square::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns who moved first in this game.
    pub fn starting_player(&self) -> Player {
        self.state.starting_player()
    }

    /// Returns the configured starting rule.
    pub fn start(&self) -> StartingPlayer {
        self.start
    }

    /// Number of accepted moves in this game.
    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the cells played, in order.
    pub fn history(&self) -> &[Cell] {
        self.state.history()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(StartingPlayer::default())
    }
}
