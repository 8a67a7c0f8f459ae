//! Strictly Othello library - a rule-checked Othello engine
//!
//! # Architecture
//!
//! - **Board**: an arena of fields indexed by state; [`Field`] and
//!   [`FieldMut`] are handles borrowed from it
//! - **Moves**: sealed [`Move`] values applied to a [`GameState`]
//! - **Contracts**: [`MoveContract`] checks turn order before and
//!   [`OthelloInvariants`] after every move
//! - **Runner**: [`OthelloGame`] asks [`Strategy`] implementations for moves
//!   under a time limit
//!
//! # Example
//!
//! ```no_run
//! use strictly_othello::{Color, FirstMoveFound, GameBuilder, PlayerBuilder, RandomMove};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), strictly_othello::OthelloError> {
//! let mut game = GameBuilder::new()
//!     .add_player(PlayerBuilder::new().with_name("Alice"), Arc::new(FirstMoveFound))?
//!     .add_player(
//!         PlayerBuilder::new().with_name("Bob").with_color(Color::White),
//!         Arc::new(RandomMove::seeded(7)),
//!     )?
//!     .build(1)?;
//! let outcome = game.play_to_end()?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game_config;
mod games;

// Crate-level exports - Match configuration
pub use game_config::{ConfigError, GameConfig, PlayerConfig};

// Crate-level exports - Othello engine
pub use games::othello::{
    Board, Color, Contract, DEFAULT_BOARD_SIZE, DEFAULT_MAX_COMPUTATION_TIME, Direction, Field,
    FieldMut, FieldState, FirstMoveFound, GameBuilder, GameState, Invariant, InvariantSet,
    InvariantViolation, MINIMUM_BOARD_SIZE, Move, MoveContract, OthelloError, OthelloGame,
    OthelloInvariants, OutOfRange, Outcome, ParsePositionError, PlaceToken, Player,
    PlayerBuilder, PlayerState, Position, RandomMove, RuleViolation, Score, SetupError, Skip,
    Strategy, StrategyKind, Turn, decide_outcome, execute_move, first_legal_placement,
    has_legal_placement, legal_placements, random_move,
};

// Crate-level exports - Invariants
pub use games::othello::invariants::{
    PartitionedBoardInvariant, SeatAssignmentInvariant, TerminalOutcomeInvariant,
};
