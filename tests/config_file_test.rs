//! Tests for loading table configuration from disk.

use std::io::Write;
use tabletop_tictactoe::{GameConfig, StartingPlayer};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "starting_player = \"random\"\nseed = 11\nx_name = \"Ada\"").unwrap();

    let config = GameConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(config.starting_player(), StartingPlayer::Random);
    assert_eq!(config.seed(), Some(11));
    assert_eq!(config.x_name(), "Ada");
    assert_eq!(config.o_name(), "Player O");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error_when_required() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "seed = \"not a number\"").unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
