//! Error kinds raised by the rule engine.
//!
//! Every failure describes an invalid request; nothing is retried internally.

use super::invariants::InvariantViolation;
use super::{Color, Direction, Position};
use derive_more::{Display, From};

/// A position, neighbour or board size outside the allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum OutOfRange {
    /// The position lies outside the board.
    #[display("Position {} out of range for a {}x{} board", position, size, size)]
    Position {
        /// The requested position.
        position: Position,
        /// Edge length of the board.
        size: usize,
    },

    /// The field has no neighbour in the requested direction.
    #[display("No {} neighbour at {}", direction, position)]
    Neighbour {
        /// The field asked for its neighbour.
        position: Position,
        /// The direction that leads off the board.
        direction: Direction,
    },

    /// The board size is odd or smaller than the minimum.
    #[display("The board size {} is not an even number of at least 4", _0)]
    BoardSize(usize),
}

impl std::error::Error for OutOfRange {}

/// A move that breaks the rules of Othello.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RuleViolation {
    /// Tokens may only be placed on empty fields.
    #[display("Placing a {} token on the non-empty field at {} is not allowed", color, position)]
    FieldOccupied {
        /// Colour of the rejected token.
        color: Color,
        /// Target field.
        position: Position,
    },

    /// A placement must flip at least one opposing token.
    #[display("Placing a {} token at {} is not allowed as no other token can be flipped", color, position)]
    NothingFlipped {
        /// Colour of the rejected token.
        color: Color,
        /// Target field.
        position: Position,
    },

    /// A player tried to move with the opponent's colour.
    #[display("Player {} cannot move with {} tokens", player, color)]
    WrongColor {
        /// Name of the acting player.
        player: String,
        /// Colour declared by the move.
        color: Color,
    },

    /// Skipping is only legal without any placement option.
    #[display("Illegal {} skip as placing a token at {} is possible", color, position)]
    SkipNotPermitted {
        /// Colour of the skipping player.
        color: Color,
        /// First legal placement found.
        position: Position,
    },

    /// The acting player is not the player to move.
    #[display("It is not {}'s turn", player)]
    NotPlayersTurn {
        /// Name of the acting player.
        player: String,
    },

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for RuleViolation {}

/// Invalid game setup: players, colours or names.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    /// No player was added for this colour.
    #[display("An Othello game needs a {} player", _0)]
    MissingPlayer(Color),

    /// A second player with an already taken colour was added.
    #[display("A player using {} tokens has already been added", _0)]
    DuplicateColor(Color),

    /// Both players carry the same name.
    #[display("Both players have the same name '{}'", _0)]
    DuplicateName(String),

    /// Player names must contain visible characters.
    #[display("Player names must not be blank")]
    BlankName,

    /// The name does not belong to either player.
    #[display("Unknown player {}", _0)]
    UnknownPlayer(String),
}

impl std::error::Error for SetupError {}

/// Top-level error of the Othello engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum OthelloError {
    /// Out-of-range board access or size.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),

    /// Illegal move.
    #[display("{}", _0)]
    RuleViolation(RuleViolation),

    /// Internal consistency check failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(InvariantViolation),

    /// Invalid game configuration.
    #[display("{}", _0)]
    Configuration(SetupError),
}

impl std::error::Error for OthelloError {}

impl OthelloError {
    /// Returns true for [`OthelloError::RuleViolation`].
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, OthelloError::RuleViolation(_))
    }
}
