//! Tabletop tic-tac-toe game engine.
//!
//! Pure game logic for a 3x3 board: occupancy, turn order, move
//! validation, win and draw detection. No rendering, audio or input
//! handling lives here; callers feed in coordinates and get back a
//! [`MoveOutcome`] to present however they like.
//!
//! # Example
//!
//! ```
//! use tabletop_engine::{GameEngine, GameStatus, MoveError, Player, StartingPlayer};
//!
//! let mut engine = GameEngine::new(StartingPlayer::X);
//! let outcome = engine.apply_move(1, 1).unwrap();
//! assert_eq!(outcome.player(), Player::X);
//! assert_eq!(outcome.status(), GameStatus::InProgress);
//!
//! // Same cell again is rejected and changes nothing.
//! assert!(matches!(engine.apply_move(1, 1), Err(MoveError::CellOccupied(_))));
//! assert_eq!(engine.move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod lines;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use engine::{GameEngine, StartingPlayer};
pub use lines::WinLine;
pub use types::{Board, Cell, GameState, GameStatus, Player, Square};
