//! Tests for loading configuration from disk.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tic_tac_toe::{GameConfig, GameMode};

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file(
        r#"
tick_rate_ms = 33
seed = 1234
mode = "pvc"
log_file = "session.log"
"#,
    );

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.tick_rate_ms(), 33);
    assert_eq!(config.tick_rate(), Duration::from_millis(33));
    assert_eq!(*config.seed(), Some(1234));
    assert_eq!(*config.mode(), Some(GameMode::HumanVsOpponent));
    assert_eq!(config.log_file().to_str(), Some("session.log"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = config_file("mode = \"pvp\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), Some(GameMode::HumanVsHuman));
    assert_eq!(*config.tick_rate_ms(), *GameConfig::default().tick_rate_ms());
}

#[test]
fn test_out_of_range_tick_rejected() {
    let file = config_file("tick_rate_ms = 5000\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = GameConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
