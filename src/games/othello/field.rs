//! Field handles: line scanning, legality and the flip engine.

use super::error::{OthelloError, OutOfRange, RuleViolation};
use super::invariants::InvariantViolation;
use super::{Board, Color, Direction, FieldState, Position};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, instrument};

/// Read-only handle to one field of a [`Board`].
///
/// A field is identified by its position; the handle borrows the board for
/// neighbour lookups.
#[derive(Clone, Copy)]
pub struct Field<'b> {
    board: &'b Board,
    position: Position,
}

impl<'b> Field<'b> {
    /// Callers must have checked that `position` is on the board.
    pub(super) fn new(board: &'b Board, position: Position) -> Self {
        Self { board, position }
    }

    /// Returns the board this field belongs to.
    pub fn board(&self) -> &'b Board {
        self.board
    }

    /// Returns the position of this field.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current state of this field.
    pub fn state(&self) -> FieldState {
        self.board
            .state_at(self.position)
            .unwrap_or(FieldState::Empty)
    }

    /// Returns true if a field exists one step away in `direction`.
    pub fn has_neighbour(&self, direction: Direction) -> bool {
        self.board.has_field_at(direction.step(self.position))
    }

    /// Returns the neighbouring field in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Neighbour`] at the board edge.
    pub fn neighbour(&self, direction: Direction) -> Result<Field<'b>, OthelloError> {
        if !self.has_neighbour(direction) {
            return Err(OutOfRange::Neighbour {
                position: self.position,
                direction,
            }
            .into());
        }
        Ok(Field::new(self.board, direction.step(self.position)))
    }

    /// Scans from this field in `direction` for a line of opposing tokens.
    ///
    /// Walks away from this field, collecting fields holding
    /// `delimiter.inverse()`. Returns the collected fields once a field in the
    /// `delimiter` state is reached. Returns an empty line if the walk meets
    /// an empty field or runs off the board first.
    pub fn line_of_tokens(&self, direction: Direction, delimiter: FieldState) -> Vec<Field<'b>> {
        let mut line = Vec::new();
        let mut current = *self;
        while let Ok(next) = current.neighbour(direction) {
            current = next;
            let state = current.state();
            if state == delimiter {
                return line;
            }
            if state.is_empty() {
                return Vec::new();
            }
            line.push(current);
        }
        Vec::new()
    }

    /// Returns every field a token of `color` placed here would flip.
    ///
    /// This is the union of the lines in all eight directions; a field
    /// reachable along two directions appears once.
    pub fn flips_for(&self, color: Color) -> BTreeSet<Position> {
        let delimiter = color.field_state();
        Direction::ALL
            .into_iter()
            .flat_map(|direction| self.line_of_tokens(direction, delimiter))
            .map(|field| field.position)
            .collect()
    }

    /// Returns true if placing a token of `color` here is legal.
    pub fn is_active(&self, color: Color) -> bool {
        if !self.state().is_empty() {
            return false;
        }
        let delimiter = color.field_state();
        Direction::ALL
            .into_iter()
            .any(|direction| !self.line_of_tokens(direction, delimiter).is_empty())
    }
}

impl PartialEq for Field<'_> {
    /// Compares position and state, not the owning boards.
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.state() == other.state()
    }
}

impl Eq for Field<'_> {}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("position", &self.position)
            .field("state", &self.state())
            .finish()
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.position, self.state())
    }
}

/// Mutable handle to one field of a [`Board`].
///
/// This is the only path through which field states change.
pub struct FieldMut<'b> {
    board: &'b mut Board,
    position: Position,
}

impl<'b> FieldMut<'b> {
    /// Callers must have checked that `position` is on the board.
    pub(super) fn new(board: &'b mut Board, position: Position) -> Self {
        Self { board, position }
    }

    /// Returns a read-only view of this field.
    pub fn as_field(&self) -> Field<'_> {
        Field::new(self.board, self.position)
    }

    /// Returns the position of this field.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current state of this field.
    pub fn state(&self) -> FieldState {
        self.as_field().state()
    }

    /// Places a token of `color` here and flips every enclosed opposing token.
    ///
    /// Returns the positions that were flipped.
    ///
    /// # Errors
    ///
    /// - [`RuleViolation::FieldOccupied`] if the field is not empty.
    /// - [`RuleViolation::NothingFlipped`] if no opposing token would flip.
    #[instrument(skip(self), fields(position = %self.position))]
    pub fn place_token(mut self, color: Color) -> Result<BTreeSet<Position>, OthelloError> {
        let position = self.position;
        if !self.state().is_empty() {
            return Err(RuleViolation::FieldOccupied { color, position }.into());
        }

        let flips = self.as_field().flips_for(color);
        if flips.is_empty() {
            return Err(RuleViolation::NothingFlipped { color, position }.into());
        }

        let new_state = color.field_state();
        self.set_state(new_state)?;
        for &flipped in &flips {
            self.board.field_at_mut(flipped)?.set_state(new_state)?;
        }

        debug!(flipped = flips.len(), "Token placed");
        Ok(flips)
    }

    /// Changes the state of this field and updates the board's index.
    ///
    /// Setting the current state again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when a non-empty field would become empty.
    pub(super) fn set_state(&mut self, new_state: FieldState) -> Result<(), OthelloError> {
        let old_state = self.state();
        if old_state == new_state {
            return Ok(());
        }
        if !old_state.is_empty() && new_state.is_empty() {
            return Err(InvariantViolation::new(format!(
                "The field at {} cannot become empty again",
                self.position
            ))
            .into());
        }

        self.board.write_cell(self.position, new_state);
        self.board.note_state_change(old_state, new_state, self.position);
        Ok(())
    }
}
