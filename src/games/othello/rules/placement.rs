//! Legal placement enumeration.

use super::super::{Board, Color, FieldState, Position};
use tracing::instrument;

/// Returns every empty field where `color` may place a token, row-major.
#[instrument(skip(board), fields(size = board.size()))]
pub fn legal_placements(board: &Board, color: Color) -> Vec<Position> {
    board
        .fields_being(FieldState::Empty)
        .filter(|field| field.is_active(color))
        .map(|field| field.position())
        .collect()
}

/// Returns the first legal placement for `color` in row-major order.
pub fn first_legal_placement(board: &Board, color: Color) -> Option<Position> {
    board
        .fields_being(FieldState::Empty)
        .find(|field| field.is_active(color))
        .map(|field| field.position())
}

/// Returns true if `color` has at least one legal placement.
pub fn has_legal_placement(board: &Board, color: Color) -> bool {
    first_legal_placement(board, color).is_some()
}
