//! Move-choosing strategies for computer players.

use super::rules::legal_placements;
use super::{GameState, Move, Player};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, instrument};

/// Chooses a move for a player.
///
/// Strategies receive a private copy of the game and may take their time;
/// the runner enforces the time limit. Returning `None` lets the runner pick
/// a random legal move instead.
pub trait Strategy: Send + Sync + fmt::Debug {
    /// Short name used in logs and configuration.
    fn name(&self) -> &str;

    /// Computes the next move for `player` in `state`.
    fn compute_next_move(&self, player: &Player, state: &GameState) -> Option<Move>;
}

/// Picks a uniformly random legal move, or a skip if none exists.
#[instrument(skip(state, rng), fields(player = %player))]
pub fn random_move<R: Rng + ?Sized>(player: &Player, state: &GameState, rng: &mut R) -> Move {
    let color = player.color();
    let chosen = legal_placements(state.board(), color).into_iter().choose(rng);
    debug!(?chosen, "Random move chosen");
    match chosen {
        Some(position) => Move::place_token(color, position),
        None => Move::skip(color),
    }
}

/// Plays the first legal placement in row-major order, or skips.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveFound;

impl Strategy for FirstMoveFound {
    fn name(&self) -> &str {
        "first-move"
    }

    fn compute_next_move(&self, player: &Player, state: &GameState) -> Option<Move> {
        let color = player.color();
        let mov = super::rules::first_legal_placement(state.board(), color)
            .map(|position| Move::place_token(color, position))
            .unwrap_or_else(|| Move::skip(color));
        Some(mov)
    }
}

/// Plays a random legal move.
#[derive(Debug)]
pub struct RandomMove {
    rng: Mutex<StdRng>,
}

impl RandomMove {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a reproducible strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomMove {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomMove {
    fn name(&self) -> &str {
        "random"
    }

    fn compute_next_move(&self, player: &Player, state: &GameState) -> Option<Move> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Some(random_move(player, state, &mut *rng))
    }
}

/// Built-in strategies selectable from configuration and the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// Always the first legal placement.
    FirstMove,
    /// A random legal placement.
    #[default]
    Random,
}

impl StrategyKind {
    /// Instantiates the strategy; `seed` makes random play reproducible.
    pub fn build(self, seed: Option<u64>) -> Arc<dyn Strategy> {
        match self {
            StrategyKind::FirstMove => Arc::new(FirstMoveFound),
            StrategyKind::Random => match seed {
                Some(seed) => Arc::new(RandomMove::seeded(seed)),
                None => Arc::new(RandomMove::new()),
            },
        }
    }
}
