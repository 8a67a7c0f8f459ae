//! Terminal invariant: the outcome appears exactly when the game has ended.

use super::super::rules::{Outcome, decide_outcome};
use super::super::{Color, GameState, PlayerState};
use super::Invariant;
use tracing::warn;

/// Invariant: at most two skips happen back to back, an outcome exists once
/// they have, and a majority outcome agrees with the player states.
///
/// Resignation ends the game without skips and is exempt from the majority
/// check.
pub struct TerminalOutcomeInvariant;

impl TerminalOutcomeInvariant {
    fn expected_states(outcome: Outcome) -> (PlayerState, PlayerState) {
        match outcome {
            Outcome::Winner(Color::Black) => (PlayerState::Won, PlayerState::Lost),
            Outcome::Winner(Color::White) => (PlayerState::Lost, PlayerState::Won),
            Outcome::Draw => (PlayerState::Draw, PlayerState::Draw),
        }
    }
}

impl Invariant<GameState> for TerminalOutcomeInvariant {
    fn holds(state: &GameState) -> bool {
        let skips = state.consecutive_skips();
        if skips > 2 {
            warn!(skips, "Game continued past two consecutive skips");
            return false;
        }

        let resigned = state.state_of(Color::Black) == PlayerState::Resigned
            || state.state_of(Color::White) == PlayerState::Resigned;

        match state.outcome() {
            None => skips < 2 && !resigned,
            Some(_) if resigned => true,
            Some(outcome) => {
                let states = (state.state_of(Color::Black), state.state_of(Color::White));
                skips == 2
                    && outcome == decide_outcome(state.score())
                    && states == Self::expected_states(outcome)
            }
        }
    }

    fn description() -> &'static str {
        "Outcome is decided exactly once the game has ended"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::Player;

    fn new_game() -> GameState {
        GameState::with_size(
            4,
            Player::new("B".to_string(), Color::Black),
            Player::new("W".to_string(), Color::White),
        )
        .unwrap()
    }

    #[test]
    fn test_running_game_holds() {
        assert!(TerminalOutcomeInvariant::holds(&new_game()));
    }

    #[test]
    fn test_double_skip_decides_game() {
        let mut state = new_game();
        state.move_completed(true);
        state.next_turn();
        assert!(TerminalOutcomeInvariant::holds(&state));
        state.move_completed(true);
        state.next_turn();
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert!(TerminalOutcomeInvariant::holds(&state));
    }

    #[test]
    fn test_resignation_holds() {
        let mut state = new_game();
        state.resign(Color::Black);
        assert!(TerminalOutcomeInvariant::holds(&state));
    }

    #[test]
    fn test_state_without_outcome_violates() {
        let mut state = new_game();
        state.set_player_state("B", PlayerState::Resigned).unwrap();
        assert!(!TerminalOutcomeInvariant::holds(&state));
    }
}
