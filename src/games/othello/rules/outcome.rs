//! Token counting and winner determination.

use super::super::{Board, Color};
use derive_new::new;
use std::fmt;

/// Token counts of both colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, new)]
pub struct Score {
    /// Number of black tokens.
    pub black: usize,
    /// Number of white tokens.
    pub white: usize,
}

impl Score {
    /// Counts the tokens on a board.
    pub fn of(board: &Board) -> Self {
        Self::new(board.count_tokens(Color::Black), board.count_tokens(Color::White))
    }

    /// Returns the count for one colour.
    pub fn tokens(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "black {} - white {}", self.black, self.white)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player of this colour won.
    Winner(Color),
    /// Both colours hold the same number of tokens.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(*color),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{} wins", color),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Decides a finished game by strict token majority.
pub fn decide_outcome(score: Score) -> Outcome {
    match score.black.cmp(&score.white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Color::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
