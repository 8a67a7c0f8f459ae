//! Othello rule engine.
//!
//! The [`Board`] owns every field; [`Field`] and [`FieldMut`] are handles
//! borrowed from it. Moves are validated against the rules, applied to a
//! [`GameState`] and checked by [`MoveContract`]. [`OthelloGame`] drives a
//! match between two [`Strategy`] implementations.

mod action;
mod board;
mod builder;
mod contracts;
mod direction;
pub mod error;
mod field;
mod field_state;
mod game;
pub mod invariants;
mod player;
mod position;
pub mod rules;
mod state;
mod strategy;

pub use action::{Move, PlaceToken, Skip};
pub use board::{Board, DEFAULT_BOARD_SIZE, MINIMUM_BOARD_SIZE};
pub use builder::{DEFAULT_MAX_COMPUTATION_TIME, GameBuilder};
pub use contracts::{Contract, GameInProgress, MonotonicProgress, MoveContract, PlayersTurn, execute_move};
pub use direction::Direction;
pub use error::{OthelloError, OutOfRange, RuleViolation, SetupError};
pub use field::{Field, FieldMut};
pub use field_state::{Color, FieldState};
pub use game::{OthelloGame, Turn};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, OthelloInvariants};
pub use player::{Player, PlayerBuilder, PlayerState};
pub use position::{ParsePositionError, Position};
pub use rules::{Outcome, Score, decide_outcome, first_legal_placement, has_legal_placement, legal_placements};
pub use state::GameState;
pub use strategy::{FirstMoveFound, RandomMove, Strategy, StrategyKind, random_move};
