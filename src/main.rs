//! Tabletop Tic-Tac-Toe - CLI entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tabletop_tictactoe::{
    Cli, Command, GameConfig, GameEngine, LinePicker, TableSession, TerminalPresenter,
    parse_moves, replay,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the table on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command {
        Command::Play { first, seed } => run_play(config.with_overrides(first, seed)),
        Command::Replay {
            moves,
            first,
            seed,
            json,
        } => run_replay(config.with_overrides(first, seed), &moves, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!(starting_player = %config.starting_player(), "Opening table");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let presenter = TerminalPresenter::new(stdout.lock(), &config);
    let mut picker = LinePicker::new(stdin.lock(), io::stderr());
    let mut session = TableSession::new(config, presenter);

    let stats = session.run(&mut picker)?;

    let mut out = session.into_presenter().into_inner();
    writeln!(out, "{stats}")?;
    Ok(())
}

/// Replay a move list and print the outcomes
#[instrument(skip(config))]
fn run_replay(config: GameConfig, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let mut engine = match config.seed() {
        Some(seed) => GameEngine::with_seed(config.starting_player(), seed),
        None => GameEngine::new(config.starting_player()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay(&mut engine, &moves, json, &mut out)?;
    Ok(())
}
