//! Match configuration loaded from TOML.

use crate::games::othello::{
    Color, DEFAULT_BOARD_SIZE, GameBuilder, OthelloError, PlayerBuilder, StrategyKind,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One seat at the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player name, unique within the match.
    name: String,

    /// Token colour (`black` or `white`).
    color: Color,

    /// Built-in strategy (`first-move` or `random`).
    #[serde(default)]
    strategy: StrategyKind,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(name: impl Into<String>, color: Color, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            color,
            strategy,
        }
    }
}

/// Configuration for one Othello match.
///
/// ```toml
/// board_size = 8
/// max_computation_time_ms = 5000
///
/// [[players]]
/// name = "Alice"
/// color = "black"
/// strategy = "first-move"
///
/// [[players]]
/// name = "Bob"
/// color = "white"
/// strategy = "random"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Edge length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Time a strategy gets per move, in milliseconds.
    #[serde(default = "default_max_computation_time_ms")]
    max_computation_time_ms: u64,

    /// Seed for random strategies and fallback moves.
    #[serde(default)]
    seed: Option<u64>,

    /// Both players.
    #[serde(default = "default_players")]
    #[setters(skip)]
    players: Vec<PlayerConfig>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_max_computation_time_ms() -> u64 {
    5000
}

fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig::new("Black", Color::Black, StrategyKind::Random),
        PlayerConfig::new("White", Color::White, StrategyKind::Random),
    ]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            max_computation_time_ms: default_max_computation_time_ms(),
            seed: None,
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            board_size = config.board_size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces name and/or strategy of the seat with the given colour.
    ///
    /// Adds the seat if the configuration had none for that colour.
    #[instrument(skip(self))]
    pub fn override_player(
        &mut self,
        color: Color,
        name: Option<String>,
        strategy: Option<StrategyKind>,
    ) {
        let index = match self.players.iter().position(|p| p.color == color) {
            Some(index) => index,
            None => {
                let default_name = match color {
                    Color::Black => "Black",
                    Color::White => "White",
                };
                self.players
                    .push(PlayerConfig::new(default_name, color, StrategyKind::default()));
                self.players.len() - 1
            }
        };
        let seat = &mut self.players[index];
        if let Some(name) = name {
            seat.name = name;
        }
        if let Some(strategy) = strategy {
            seat.strategy = strategy;
        }
    }

    /// Turns the configuration into a [`GameBuilder`] with both seats filled.
    ///
    /// Each seat's random strategy gets its own seed derived from `seed`.
    ///
    /// # Errors
    ///
    /// Fails if two entries share a colour.
    #[instrument(skip(self))]
    pub fn to_builder(&self) -> Result<GameBuilder, OthelloError> {
        let mut builder = GameBuilder::new()
            .with_board_size(self.board_size)
            .with_max_computation_time(Duration::from_millis(self.max_computation_time_ms))
            .with_fallback_seed(self.seed);

        for (offset, seat) in (1u64..).zip(&self.players) {
            let player = PlayerBuilder::new()
                .with_name(seat.name.as_str())
                .with_color(seat.color);
            let strategy = seat
                .strategy
                .build(self.seed.map(|seed| seed.wrapping_add(offset)));
            builder = builder.add_player(player, strategy)?;
        }
        Ok(builder)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
