//! Tabletop tic-tac-toe host.
//!
//! Connects the pure [`tabletop_engine`] to the things around it.
//!
//! # Architecture
//!
//! - **Collaborators**: [`Picker`] (input) and [`Presenter`] (output) contracts
//! - **Session**: [`TableSession`] feeds picks to the engine and outcomes to the presenter
//! - **Terminal**: text-mode picker and presenter standing in for the 3D scene
//! - **Config**: TOML settings for starting player, seed and player names
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tabletop_tictactoe::{GameConfig, LinePicker, TableSession, TerminalPresenter};
//!
//! let config = GameConfig::default();
//! let presenter = TerminalPresenter::new(Vec::new(), &config);
//! let mut session = TableSession::new(config, presenter);
//!
//! let mut picker = LinePicker::new(Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\n"), Vec::new());
//! let stats = session.run(&mut picker).unwrap();
//! assert_eq!(stats.x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod collaborators;
mod config;
mod replay;
mod session;
mod terminal;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Collaborator contracts
pub use collaborators::{Cue, HostEvent, Picker, PresentError, Presenter};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Replay
pub use replay::{ReplayError, parse_moves, replay};

// Crate-level exports - Session management
pub use session::{SessionControl, SessionStats, TableSession};

// Crate-level exports - Terminal stand-ins
pub use terminal::{LinePicker, PickError, TerminalPresenter, parse_line};

// Crate-level exports - Game types
pub use tabletop_engine::{
    Board, Cell, GameEngine, GameStatus, MoveError, MoveOutcome, Player, StartingPlayer, WinLine,
};
