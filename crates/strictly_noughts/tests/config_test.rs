//! Tests for session configuration loading.

use std::io::Write;
use strictly_noughts::{Opponent, Player, Session, SessionConfig};

#[test]
fn test_defaults_match_classic_layout() {
    let config = SessionConfig::default();
    assert_eq!(*config.opponent(), Opponent::Computer);
    assert_eq!(*config.computer(), Player::X);
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(config.computer_player(), Some(Player::X));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SessionConfig::from_toml_str("").unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_partial_toml_overrides() {
    let config = SessionConfig::from_toml_str(
        r#"
        opponent = "human"
        first_player = "X"
        "#,
    )
    .unwrap();
    assert_eq!(*config.opponent(), Opponent::Human);
    assert_eq!(*config.first_player(), Player::X);
    assert_eq!(config.computer_player(), None);
}

#[test]
fn test_invalid_toml_reports_location() {
    let err = SessionConfig::from_toml_str(r#"opponent = "robot""#).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"computer\"").unwrap();
    writeln!(file, "computer = \"O\"").unwrap();
    writeln!(file, "first_player = \"X\"").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config.computer_player(), Some(Player::O));

    let session = Session::new(config);
    assert_eq!(session.to_move(), Player::X);
    assert!(!session.is_computer_turn());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = SessionConfig::two_humans(Player::O);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(SessionConfig::from_toml_str(&text).unwrap(), config);
}
