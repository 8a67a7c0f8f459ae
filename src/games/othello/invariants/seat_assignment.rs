//! Seat invariant: each colour is held by its own, distinctly named player.

use super::super::{Color, GameState};
use super::Invariant;

/// Invariant: the black seat uses black tokens, the white seat white ones,
/// and the two players have different names.
pub struct SeatAssignmentInvariant;

impl Invariant<GameState> for SeatAssignmentInvariant {
    fn holds(state: &GameState) -> bool {
        state.black_player().color() == Color::Black
            && state.white_player().color() == Color::White
            && state.black_player().name() != state.white_player().name()
            && state.current_player().color() != state.other_player().color()
    }

    fn description() -> &'static str {
        "Each colour belongs to exactly one distinctly named player"
    }
}
