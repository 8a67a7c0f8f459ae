//! Game runner: asks strategies for moves and drives a game to its end.

use super::contracts::execute_move;
use super::error::OthelloError;
use super::invariants::InvariantViolation;
use super::rules::Outcome;
use super::strategy::{Strategy, random_move};
use super::{Color, GameState, Move, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The move was accepted and the turn passed.
    Played(Move),
    /// The engine rejected the move; the acting player resigned.
    Resigned {
        /// The rejected move.
        rejected: Move,
        /// Why the engine rejected it.
        reason: OthelloError,
    },
}

/// A running Othello match between two strategies.
///
/// Each turn the current player's strategy gets a deep copy of the state on a
/// worker thread. If it does not answer within the time limit, or answers
/// `None`, a random legal move is played instead.
#[derive(Debug)]
pub struct OthelloGame {
    id: u64,
    state: GameState,
    black_strategy: Arc<dyn Strategy>,
    white_strategy: Arc<dyn Strategy>,
    max_computation_time: Duration,
    history: Vec<Move>,
    fallback_rng: StdRng,
}

impl OthelloGame {
    pub(super) fn new(
        id: u64,
        state: GameState,
        black_strategy: Arc<dyn Strategy>,
        white_strategy: Arc<dyn Strategy>,
        max_computation_time: Duration,
        fallback_seed: Option<u64>,
    ) -> Self {
        let fallback_rng = match fallback_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            id,
            black = %black_strategy.name(),
            white = %white_strategy.name(),
            "Game created"
        );
        Self {
            id,
            state,
            black_strategy,
            white_strategy,
            max_computation_time,
            history: Vec::new(),
            fallback_rng,
        }
    }

    /// Returns the game's id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the time a strategy gets per move.
    pub fn max_computation_time(&self) -> Duration {
        self.max_computation_time
    }

    /// Returns true once the game is decided.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Plays one turn for the current player.
    ///
    /// # Errors
    ///
    /// - [`OthelloError::RuleViolation`] with `GameOver` if the game is decided.
    /// - [`OthelloError::InvariantViolation`] if a move corrupted the state.
    ///
    /// Moves the engine rejects for breaking the rules are not errors: the
    /// player resigns and [`Turn::Resigned`] is returned.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn make_move(&mut self) -> Result<Turn, OthelloError> {
        if self.state.is_finished() {
            return Err(super::error::RuleViolation::GameOver.into());
        }

        let player = self.state.current_player().clone();
        let mov = self.choose_move(&player);

        match execute_move(&mut self.state, &player, &mov) {
            Ok(()) => {
                self.history.push(mov);
                Ok(Turn::Played(mov))
            }
            Err(reason @ (OthelloError::RuleViolation(_) | OthelloError::OutOfRange(_))) => {
                warn!(%player, %mov, %reason, "Move rejected, player resigns");
                self.state.resign(player.color());
                Ok(Turn::Resigned {
                    rejected: mov,
                    reason,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Plays until the game is decided and returns the outcome.
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from [`OthelloGame::make_move`].
    #[instrument(skip(self), fields(id = self.id))]
    pub fn play_to_end(&mut self) -> Result<Outcome, OthelloError> {
        while !self.state.is_finished() {
            self.make_move()?;
        }
        let outcome = self
            .state
            .outcome()
            .ok_or_else(|| InvariantViolation::new("Finished game has no outcome"))?;
        info!(
            id = self.id,
            %outcome,
            score = %self.state.score(),
            moves = self.history.len(),
            "Match over"
        );
        Ok(outcome)
    }

    fn strategy_for(&self, color: Color) -> Arc<dyn Strategy> {
        match color {
            Color::Black => Arc::clone(&self.black_strategy),
            Color::White => Arc::clone(&self.white_strategy),
        }
    }

    /// Asks the player's strategy for a move, falling back to a random one.
    fn choose_move(&mut self, player: &Player) -> Move {
        let strategy = self.strategy_for(player.color());
        let snapshot = self.state.deep_copy();
        let worker_player = player.clone();
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name(format!("strategy-{}", strategy.name()))
            .spawn(move || {
                // The receiver is gone after a timeout; the answer is dropped.
                let _ = tx.send(strategy.compute_next_move(&worker_player, &snapshot));
            });

        let answer = match spawned {
            Ok(_) => match rx.recv_timeout(self.max_computation_time) {
                Ok(Some(mov)) => return mov,
                Ok(None) => "no move",
                Err(mpsc::RecvTimeoutError::Timeout) => "timed out",
                Err(mpsc::RecvTimeoutError::Disconnected) => "strategy failed",
            },
            Err(error) => {
                warn!(%error, "Could not start strategy thread");
                "no thread"
            }
        };

        let fallback = random_move(player, &self.state, &mut self.fallback_rng);
        warn!(%player, reason = answer, %fallback, "Using random fallback move");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::{FirstMoveFound, GameBuilder, PlayerBuilder, Position};

    #[derive(Debug)]
    struct Cheater;

    impl Strategy for Cheater {
        fn name(&self) -> &str {
            "cheater"
        }

        fn compute_next_move(&self, player: &Player, _state: &GameState) -> Option<Move> {
            Some(Move::place_token(player.color(), Position::new(0, 0)))
        }
    }

    #[derive(Debug)]
    struct Undecided;

    impl Strategy for Undecided {
        fn name(&self) -> &str {
            "undecided"
        }

        fn compute_next_move(&self, _player: &Player, _state: &GameState) -> Option<Move> {
            None
        }
    }

    fn game(black: Arc<dyn Strategy>, white: Arc<dyn Strategy>) -> OthelloGame {
        GameBuilder::new()
            .with_board_size(4)
            .add_player(PlayerBuilder::new().with_name("Ann"), black)
            .unwrap()
            .add_player(
                PlayerBuilder::new().with_name("Ben").with_color(Color::White),
                white,
            )
            .unwrap()
            .with_fallback_seed(Some(1))
            .build(1)
            .unwrap()
    }

    #[test]
    fn test_first_move_strategy_is_played() {
        let mut game = game(Arc::new(FirstMoveFound), Arc::new(FirstMoveFound));
        let turn = game.make_move().unwrap();
        assert_eq!(turn, Turn::Played(Move::place_token(Color::Black, Position::new(0, 1))));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.state().current_player().color(), Color::White);
    }

    #[test]
    fn test_rejected_move_resigns() {
        let mut game = game(Arc::new(Cheater), Arc::new(FirstMoveFound));
        let turn = game.make_move().unwrap();
        assert!(matches!(turn, Turn::Resigned { .. }));
        assert!(game.is_finished());
        assert_eq!(game.state().outcome(), Some(Outcome::Winner(Color::White)));
        assert!(game.history().is_empty());
        assert!(game.make_move().is_err());
    }

    #[test]
    fn test_none_falls_back_to_random_move() {
        let mut game = game(Arc::new(Undecided), Arc::new(Undecided));
        let outcome = game.play_to_end().unwrap();
        assert_eq!(game.state().outcome(), Some(outcome));
        assert!(!game.history().is_empty());
        assert!(game.state().players().iter().all(|p| {
            game.state().player_state(p.name()).unwrap().is_final()
        }));
    }
}
