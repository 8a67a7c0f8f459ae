//! Token colours and the tri-state content of a board field.

use serde::{Deserialize, Serialize};

/// The colour of a token, and therefore of the player placing it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    /// Black tokens (moves first).
    #[default]
    Black,
    /// White tokens.
    White,
}

impl Color {
    /// Returns the opponent's colour.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the field state a token of this colour produces.
    pub fn field_state(self) -> FieldState {
        match self {
            Color::Black => FieldState::Black,
            Color::White => FieldState::White,
        }
    }
}

/// Content of a single board field.
///
/// Once a field leaves [`FieldState::Empty`] it only ever toggles between
/// black and white; the board rejects any transition back to empty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum FieldState {
    /// No token on the field.
    Empty,
    /// A black token.
    Black,
    /// A white token.
    White,
}

impl FieldState {
    /// Swaps black and white. Empty maps to itself.
    pub fn inverse(self) -> Self {
        match self {
            FieldState::Empty => FieldState::Empty,
            FieldState::Black => FieldState::White,
            FieldState::White => FieldState::Black,
        }
    }

    /// Returns the token colour on the field, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            FieldState::Empty => None,
            FieldState::Black => Some(Color::Black),
            FieldState::White => Some(Color::White),
        }
    }

    /// Returns true for [`FieldState::Empty`].
    pub fn is_empty(self) -> bool {
        self == FieldState::Empty
    }
}

impl From<Color> for FieldState {
    fn from(color: Color) -> Self {
        color.field_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        assert_eq!(FieldState::Empty.inverse(), FieldState::Empty);
        assert_eq!(FieldState::Black.inverse(), FieldState::White);
        assert_eq!(FieldState::White.inverse(), FieldState::Black);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(FieldState::Empty.to_string(), "empty");
        assert_eq!(FieldState::Black.to_string(), "black");
        assert_eq!(Color::White.to_string(), "white");
    }

    #[test]
    fn test_color_round_trips_through_field_state() {
        assert_eq!(Color::Black.field_state().color(), Some(Color::Black));
        assert_eq!(Color::White.field_state().color(), Some(Color::White));
        assert_eq!(FieldState::Empty.color(), None);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
}
