//! Game rules for Othello.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from board
//! storage so that moves, contracts and strategies share one definition.

pub mod outcome;
pub mod placement;

pub use outcome::{Outcome, Score, decide_outcome};
pub use placement::{first_legal_placement, has_legal_placement, legal_placements};
