//! Players and their per-game status.

use super::error::{OthelloError, SetupError};
use super::Color;
use derive_new::new;
use derive_setters::Setters;
use std::fmt;
use tracing::instrument;

/// Status of a player within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    /// The game is still running for this player.
    #[default]
    Playing,
    /// The player has more tokens at the end.
    Won,
    /// The player has fewer tokens at the end.
    Lost,
    /// Both players finished with the same number of tokens.
    Draw,
    /// The player gave up, or was forced out by an illegal move.
    Resigned,
}

impl PlayerState {
    /// Returns true unless the state is [`PlayerState::Playing`].
    pub fn is_final(self) -> bool {
        self != PlayerState::Playing
    }
}

/// A participant with a name and a token colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the colour of the player's tokens.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

/// Collects a player's name and colour before the game exists.
///
/// New builders use black tokens.
#[derive(Debug, Clone, Default, Setters)]
#[setters(prefix = "with_")]
pub struct PlayerBuilder {
    #[setters(into)]
    name: String,
    color: Color,
}

impl PlayerBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the colour chosen so far.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the name chosen so far.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the player.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::BlankName`] if the name has no visible characters.
    #[instrument(skip(self), fields(name = %self.name, color = %self.color))]
    pub fn build(&self) -> Result<Player, OthelloError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SetupError::BlankName.into());
        }
        Ok(Player::new(name.to_string(), self.color))
    }
}
