//! Tests for loading match configuration from TOML files.

use std::io::Write;
use std::time::Duration;
use strictly_othello::{Color, GameConfig, StrategyKind};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
board_size = 6
max_computation_time_ms = 250
seed = 9

[[players]]
name = "Alice"
color = "black"
strategy = "first-move"

[[players]]
name = "Bob"
color = "white"
strategy = "random"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 6);
    assert_eq!(*config.max_computation_time_ms(), 250);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(config.players()[0].name(), "Alice");
    assert_eq!(*config.players()[0].strategy(), StrategyKind::FirstMove);
    assert_eq!(*config.players()[1].color(), Color::White);

    let mut game = config.to_builder().unwrap().build(1).unwrap();
    assert_eq!(game.max_computation_time(), Duration::from_millis(250));
    assert_eq!(game.state().black_player().name(), "Alice");
    game.play_to_end().unwrap();
    assert!(game.is_finished());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.board_size(), 8);
    assert_eq!(*config.max_computation_time_ms(), 5000);
}

#[test]
fn test_unknown_strategy_rejected() {
    let file = write_config(
        r#"
[[players]]
name = "Alice"
color = "black"
strategy = "minimax"
"#,
    );
    let error = GameConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_reported() {
    let error = GameConfig::from_file("/nonexistent/othello.toml").unwrap_err();
    assert!(error.message.contains("Failed to read config file"));
    assert!(error.file.ends_with("game_config.rs"));
}

#[test]
fn test_duplicate_colours_rejected() {
    let file = write_config(
        r#"
[[players]]
name = "Alice"
color = "black"

[[players]]
name = "Bob"
color = "black"
"#,
    );
    let config = GameConfig::from_file(file.path()).unwrap();
    assert!(config.to_builder().is_err());
}
