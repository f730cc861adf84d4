//! A table session: one engine, one presenter, many games.

use crate::collaborators::{Cue, HostEvent, Picker, PresentError, Presenter};
use crate::config::GameConfig;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tabletop_engine::{GameEngine, GameStatus, MoveError, MoveOutcome, Player};
use tracing::{debug, info, instrument, warn};

/// Whether the session loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    /// Wait for the next event.
    Continue,
    /// The user asked to leave.
    Stop,
}

/// Results tallied over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionStats {
    /// Games won by X.
    #[getter(copy)]
    x_wins: u32,
    /// Games won by O.
    #[getter(copy)]
    o_wins: u32,
    /// Drawn games.
    #[getter(copy)]
    draws: u32,
}

impl SessionStats {
    /// Finished games in total.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won { winner: Player::X, .. } => self.x_wins += 1,
            GameStatus::Won { winner: Player::O, .. } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} game(s): X won {}, O won {}, {} draw(s)",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Wires a [`GameEngine`] to a [`Presenter`].
///
/// Every accepted move is forwarded to the presenter as a piece placement
/// plus cues. Rejected moves are handled here and never reach the
/// presenter as pieces.
pub struct TableSession<P> {
    engine: GameEngine,
    presenter: P,
    config: GameConfig,
    stats: SessionStats,
}

impl<P: Presenter> TableSession<P> {
    /// Creates a session and its engine from `config`.
    #[instrument(skip(presenter))]
    pub fn new(config: GameConfig, presenter: P) -> Self {
        let engine = match config.seed() {
            Some(seed) => GameEngine::with_seed(config.starting_player(), seed),
            None => GameEngine::new(config.starting_player()),
        };
        Self {
            engine,
            presenter,
            config,
            stats: SessionStats::default(),
        }
    }

    /// Shows the opening board.
    pub fn start(&mut self) -> Result<(), PresentError> {
        let first = self.engine.current_player();
        self.presenter.clear_board(first)?;
        self.presenter.show_board(self.engine.board())?;
        self.presenter.show_turn(first)
    }

    /// Reacts to one event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: HostEvent) -> Result<SessionControl, PresentError> {
        match event {
            HostEvent::CellSelected { row, col } => {
                match self.engine.apply_move(row, col) {
                    Ok(outcome) => self.present_outcome(&outcome)?,
                    Err(e) => self.present_rejection(e)?,
                }
                Ok(SessionControl::Continue)
            }
            HostEvent::NewGame => {
                self.engine.reset(self.config.starting_player());
                self.start()?;
                Ok(SessionControl::Continue)
            }
            HostEvent::Quit => {
                info!(stats = %self.stats, "Leaving table");
                Ok(SessionControl::Stop)
            }
        }
    }

    /// Pulls events from `picker` until it runs dry or the user quits.
    #[instrument(skip(self, picker))]
    pub fn run(&mut self, picker: &mut impl Picker) -> Result<SessionStats, PresentError> {
        self.start()?;
        while let Some(event) = picker.next_event() {
            if self.handle(event)? == SessionControl::Stop {
                break;
            }
        }
        Ok(self.stats)
    }

    fn present_outcome(&mut self, outcome: &MoveOutcome) -> Result<(), PresentError> {
        self.presenter.clear_highlight()?;
        self.presenter.place_piece(outcome.player(), outcome.cell())?;
        self.presenter.play_cue(Cue::Move)?;
        self.presenter.show_board(self.engine.board())?;

        let status = outcome.status();
        match status {
            GameStatus::InProgress => self.presenter.show_turn(self.engine.current_player()),
            GameStatus::Won { .. } | GameStatus::Draw => {
                self.stats.record(&status);
                let cue = if status.winner().is_some() { Cue::Win } else { Cue::Draw };
                self.presenter.play_cue(cue)?;
                self.presenter.show_result(&status)?;
                self.presenter.prompt_new_game()
            }
        }
    }

    fn present_rejection(&mut self, error: MoveError) -> Result<(), PresentError> {
        match error {
            MoveError::CellOccupied(cell) => {
                debug!(%cell, "Ignoring pick on occupied cell");
                self.presenter.play_cue(Cue::Rejected)
            }
            MoveError::GameAlreadyOver => self.presenter.prompt_new_game(),
            MoveError::OutOfBounds { row, col } => {
                warn!(row, col, "Picker forwarded an off-board cell");
                self.presenter.play_cue(Cue::Rejected)
            }
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the tallies so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Consumes the session and returns the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
