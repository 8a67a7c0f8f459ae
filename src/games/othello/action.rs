//! First-class move types for Othello.
//!
//! A move is a player's intent. It is created through [`Move::place_token`] or
//! [`Move::skip`] and only changes a game through [`Move::apply_to`].

use super::error::{OthelloError, RuleViolation};
use super::{Color, FieldState, GameState, Player, Position};
use std::fmt;
use tracing::{debug, instrument};

/// Placing a token of one colour on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceToken {
    color: Color,
    position: Position,
}

impl PlaceToken {
    /// Returns the colour of the token.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the target field.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Passing the turn without placing a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Skip {
    color: Color,
}

impl Skip {
    /// Returns the colour of the skipping player.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// A move in Othello.
///
/// The variants carry private payloads, so the only moves that exist are the
/// ones built by the two factory functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place a token and flip the enclosed opposing tokens.
    PlaceToken(PlaceToken),
    /// Pass because no placement is possible.
    Skip(Skip),
}

impl Move {
    /// Creates a placement move.
    pub fn place_token(color: Color, position: Position) -> Self {
        Move::PlaceToken(PlaceToken { color, position })
    }

    /// Creates a skip move.
    pub fn skip(color: Color) -> Self {
        Move::Skip(Skip { color })
    }

    /// Returns the colour the move is made with.
    pub fn color(&self) -> Color {
        match self {
            Move::PlaceToken(place) => place.color,
            Move::Skip(skip) => skip.color,
        }
    }

    /// Returns the target field of a placement.
    pub fn position(&self) -> Option<Position> {
        match self {
            Move::PlaceToken(place) => Some(place.position),
            Move::Skip(_) => None,
        }
    }

    /// Returns true for a skip.
    pub fn is_skip(&self) -> bool {
        matches!(self, Move::Skip(_))
    }

    /// Applies the move to `state` on behalf of `player`.
    ///
    /// Does not pass the turn; callers follow up with [`GameState::next_turn`].
    ///
    /// # Errors
    ///
    /// - [`RuleViolation::GameOver`] once the game is decided.
    /// - [`RuleViolation::WrongColor`] if the colour is not the player's.
    /// - [`RuleViolation::FieldOccupied`] or [`RuleViolation::NothingFlipped`]
    ///   for an illegal placement; the board is left untouched.
    /// - [`RuleViolation::SkipNotPermitted`] if a placement was possible.
    #[instrument(skip(state), fields(player = %player))]
    pub fn apply_to(&self, state: &mut GameState, player: &Player) -> Result<(), OthelloError> {
        if state.is_finished() {
            return Err(RuleViolation::GameOver.into());
        }
        if self.color() != player.color() {
            return Err(RuleViolation::WrongColor {
                player: player.name().to_string(),
                color: self.color(),
            }
            .into());
        }

        match self {
            Move::PlaceToken(place) => {
                let flipped = state
                    .board_mut()
                    .field_at_mut(place.position)?
                    .place_token(place.color)?;
                debug!(flipped = flipped.len(), "Token placed");
                state.move_completed(false);
            }
            Move::Skip(skip) => {
                let active = state
                    .board()
                    .fields_being(FieldState::Empty)
                    .find(|field| field.is_active(skip.color))
                    .map(|field| field.position());
                if let Some(position) = active {
                    return Err(RuleViolation::SkipNotPermitted {
                        color: skip.color,
                        position,
                    }
                    .into());
                }
                state.move_completed(true);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::PlaceToken(place) => write!(
                f,
                "Placing {} token on field at {}",
                place.color, place.position
            ),
            Move::Skip(skip) => write!(f, "Skipping {} move", skip.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> GameState {
        GameState::with_size(
            4,
            Player::new("B".to_string(), Color::Black),
            Player::new("W".to_string(), Color::White),
        )
        .unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Move::place_token(Color::Black, Position::new(0, 1)).to_string(),
            "Placing black token on field at B1"
        );
        assert_eq!(Move::skip(Color::White).to_string(), "Skipping white move");
    }

    #[test]
    fn test_placement_flips_and_resets_skips() {
        let mut state = new_game();
        let black = state.black_player().clone();
        Move::place_token(Color::Black, Position::new(0, 1))
            .apply_to(&mut state, &black)
            .unwrap();
        assert_eq!(state.board().count_tokens(Color::Black), 4);
        assert_eq!(state.board().count_tokens(Color::White), 1);
        assert_eq!(state.consecutive_skips(), 0);
    }

    #[test]
    fn test_wrong_colour_rejected() {
        let mut state = new_game();
        let white = state.white_player().clone();
        let result = Move::place_token(Color::Black, Position::new(0, 1)).apply_to(&mut state, &white);
        assert_eq!(
            result,
            Err(OthelloError::RuleViolation(RuleViolation::WrongColor {
                player: "W".to_string(),
                color: Color::Black,
            }))
        );
        assert_eq!(state, new_game());
    }

    #[test]
    fn test_skip_rejected_when_placement_possible() {
        let mut state = new_game();
        let black = state.black_player().clone();
        let result = Move::skip(Color::Black).apply_to(&mut state, &black);
        assert_eq!(
            result,
            Err(OthelloError::RuleViolation(RuleViolation::SkipNotPermitted {
                color: Color::Black,
                position: Position::new(0, 1),
            }))
        );
        assert_eq!(state.consecutive_skips(), 0);
    }

    #[test]
    fn test_illegal_placement_leaves_board_untouched() {
        let mut state = new_game();
        let black = state.black_player().clone();
        let result = Move::place_token(Color::Black, Position::new(0, 0)).apply_to(&mut state, &black);
        assert!(result.unwrap_err().is_rule_violation());
        assert_eq!(state, new_game());
    }
}
