//! Tests for loading shell configuration.

use clap::Parser;
use kodeco_games::{Cli, FirstPlayer, ShellConfig};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = config_file(
        r#"
computer_delay_ms = 0
seed = 99
first_player = "computer"
log_file = "session.log"
"#,
    );

    let config = ShellConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.computer_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(config.log_file(), &PathBuf::from("session.log"));
}

#[test]
fn test_missing_keys_keep_defaults() {
    let file = config_file("seed = 5\n");
    let config = ShellConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(5));
    assert_eq!(*config.computer_delay_ms(), 350);
    assert_eq!(*config.first_player(), FirstPlayer::Human);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("computer_delay_ms = \"soon\"\n");
    let err = ShellConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ShellConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_flags_override_file() {
    let file = config_file("computer_delay_ms = 900\nseed = 1\n");
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from([
        "kodeco_games",
        "--config",
        path,
        "--delay-ms",
        "10",
        "--first-player",
        "computer",
    ])
    .unwrap();

    let config = ShellConfig::load(&cli).unwrap();
    assert_eq!(*config.computer_delay_ms(), 10);
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
}

#[test]
fn test_no_flags_gives_defaults() {
    let cli = Cli::try_parse_from(["kodeco_games"]).unwrap();
    assert_eq!(ShellConfig::load(&cli).unwrap(), ShellConfig::default());
}

#[test]
fn test_unknown_first_player_rejected() {
    assert!(Cli::try_parse_from(["kodeco_games", "--first-player", "robot"]).is_err());
}
