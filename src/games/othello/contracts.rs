//! Contract-based validation for Othello.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::{OthelloError, RuleViolation};
use super::invariants::{InvariantSet, InvariantViolation, OthelloInvariants};
use super::{FieldState, GameState, Move, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying it
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), OthelloError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), OthelloError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game is still running.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`RuleViolation::GameOver`] once the game is decided.
    pub fn check(state: &GameState) -> Result<(), OthelloError> {
        if state.is_finished() {
            Err(RuleViolation::GameOver.into())
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move is made with the colour whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`RuleViolation::NotPlayersTurn`] for the waiting colour.
    pub fn check(action: &Move, state: &GameState) -> Result<(), OthelloError> {
        if action.color() != state.current_player().color() {
            Err(RuleViolation::NotPlayersTurn {
                player: state.player(action.color()).name().to_string(),
            }
            .into())
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: tokens never vanish and skips are counted one at a time.
pub struct MonotonicProgress;

impl MonotonicProgress {
    /// Compares the state before and after one move.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let board = before.board();
        let vanished = board
            .positions_being(FieldState::Black)
            .iter()
            .chain(board.positions_being(FieldState::White))
            .find(|p| after.board().state_at(**p).is_none_or(|s| s.is_empty()));
        if let Some(position) = vanished {
            warn!(%position, "Token vanished");
        }

        let skips = after.consecutive_skips();
        let counted = skips == 0 || skips == before.consecutive_skips() + 1;
        if !counted {
            warn!(before = before.consecutive_skips(), after = skips, "Skip counter jumped");
        }
        vanished.is_none() && counted
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moves.
///
/// Preconditions:
/// - The game is not over
/// - The move uses the colour of the player to move
///
/// Postconditions:
/// - All [`OthelloInvariants`] hold
/// - Tokens never return to empty and skips count up by one
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), OthelloError> {
        GameInProgress::check(state)?;
        PlayersTurn::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), OthelloError> {
        OthelloInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })?;

        if !MonotonicProgress::holds(before, after) {
            return Err(InvariantViolation::new(
                "Postcondition failed: tokens vanished or skips miscounted",
            )
            .into());
        }
        Ok(())
    }
}

/// Applies `action` for `player` under the move contract and passes the turn.
///
/// Preconditions are always checked; postconditions only in debug builds.
///
/// # Errors
///
/// Any precondition, rule or postcondition failure. On a precondition or rule
/// failure the state is unchanged.
#[instrument(skip(state), fields(player = %player, action = %action))]
pub fn execute_move(state: &mut GameState, player: &Player, action: &Move) -> Result<(), OthelloError> {
    MoveContract::pre(state, action)?;

    #[cfg(debug_assertions)]
    let before = state.clone();

    action.apply_to(state, player)?;
    state.next_turn();

    #[cfg(debug_assertions)]
    MoveContract::post(&before, state)?;

    Ok(())
}
