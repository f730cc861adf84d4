//! Command-line interface for tabletop_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabletop_engine::StartingPlayer;

/// Tabletop Tic-Tac-Toe - place X and O pieces on a 3x3 table
#[derive(Parser, Debug)]
#[command(name = "tabletop_tictactoe")]
#[command(about = "Tabletop tic-tac-toe with a text-mode table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tabletop.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play at the table, reading picks from stdin
    Play {
        /// Who moves first: x, o or random
        #[arg(long)]
        first: Option<StartingPlayer>,

        /// Seed for random starting players
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply a scripted list of moves and print each outcome
    Replay {
        /// Moves as space-separated `row,col` pairs, e.g. "0,0 1,1 2,2"
        #[arg(short, long, allow_hyphen_values = true)]
        moves: String,

        /// Who moves first: x, o or random
        #[arg(long)]
        first: Option<StartingPlayer>,

        /// Seed for random starting players
        #[arg(long)]
        seed: Option<u64>,

        /// Print outcomes as JSON lines
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "tabletop_tictactoe",
            "play",
            "--first",
            "random",
            "--seed",
            "3",
        ])
        .unwrap();
        match cli.command {
            Command::Play { first, seed } => {
                assert_eq!(first, Some(StartingPlayer::Random));
                assert_eq!(seed, Some(3));
            }
            other => panic!("Unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("tabletop.toml"));
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "tabletop_tictactoe",
            "--config",
            "table.toml",
            "replay",
            "--moves",
            "-1,0 1,1",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Replay { moves, first, json, .. } => {
                assert_eq!(moves, "-1,0 1,1");
                assert_eq!(first, None);
                assert!(json);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("table.toml"));
    }

    #[test]
    fn test_bad_first_player_rejected() {
        assert!(Cli::try_parse_from(["tabletop_tictactoe", "play", "--first", "z"]).is_err());
    }
}
