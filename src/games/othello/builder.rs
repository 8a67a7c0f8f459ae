//! Assembles a runnable game from player builders and strategies.

use super::board::DEFAULT_BOARD_SIZE;
use super::error::{OthelloError, SetupError};
use super::strategy::Strategy;
use super::{Color, GameState, OthelloGame, PlayerBuilder};
use derive_setters::Setters;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default time a strategy gets to choose a move.
pub const DEFAULT_MAX_COMPUTATION_TIME: Duration = Duration::from_secs(5);

/// Collects board size, time limit and both players, then builds an
/// [`OthelloGame`].
#[derive(Debug, Clone, Setters)]
#[setters(prefix = "with_")]
pub struct GameBuilder {
    /// Edge length of the board.
    board_size: usize,
    /// Time a strategy gets per move.
    max_computation_time: Duration,
    /// Seed for the random fallback moves.
    fallback_seed: Option<u64>,
    #[setters(skip)]
    black: Option<(PlayerBuilder, Arc<dyn Strategy>)>,
    #[setters(skip)]
    white: Option<(PlayerBuilder, Arc<dyn Strategy>)>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            max_computation_time: DEFAULT_MAX_COMPUTATION_TIME,
            fallback_seed: None,
            black: None,
            white: None,
        }
    }
}

impl GameBuilder {
    /// Creates a builder for an 8x8 game with a five second time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured board size.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Returns the configured time limit.
    pub fn max_computation_time(&self) -> Duration {
        self.max_computation_time
    }

    /// Adds a player, seated by the builder's colour.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateColor`] if that colour is already taken.
    #[instrument(skip(self, strategy), fields(name = %player.name(), color = %player.color()))]
    pub fn add_player(
        mut self,
        player: PlayerBuilder,
        strategy: Arc<dyn Strategy>,
    ) -> Result<Self, OthelloError> {
        let color = player.color();
        let slot = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        if slot.is_some() {
            return Err(SetupError::DuplicateColor(color).into());
        }
        debug!(strategy = strategy.name(), "Player added");
        *slot = Some((player, strategy));
        Ok(self)
    }

    /// Builds the game.
    ///
    /// # Errors
    ///
    /// - [`SetupError::MissingPlayer`] unless both colours were added.
    /// - [`SetupError::BlankName`] or [`SetupError::DuplicateName`] for bad names.
    /// - An out-of-range error for an invalid board size.
    #[instrument(skip(self), fields(size = self.board_size))]
    pub fn build(&self, id: u64) -> Result<OthelloGame, OthelloError> {
        let (black, black_strategy) = self
            .black
            .as_ref()
            .ok_or(SetupError::MissingPlayer(Color::Black))?;
        let (white, white_strategy) = self
            .white
            .as_ref()
            .ok_or(SetupError::MissingPlayer(Color::White))?;

        let state = GameState::with_size(self.board_size, black.build()?, white.build()?)?;

        Ok(OthelloGame::new(
            id,
            state,
            Arc::clone(black_strategy),
            Arc::clone(white_strategy),
            self.max_computation_time,
            self.fallback_seed,
        ))
    }
}
