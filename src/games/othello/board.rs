//! The Othello board: an arena of field states plus a per-state index.

use super::error::{OthelloError, OutOfRange};
use super::field::{Field, FieldMut};
use super::{Color, FieldState, Position};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, instrument};

/// Smallest supported edge length.
pub const MINIMUM_BOARD_SIZE: usize = 4;

/// Edge length of the canonical board.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Positions grouped by the state of their field.
///
/// The three buckets always partition the full set of positions.
#[derive(Debug, Clone, Default)]
struct StateIndex {
    empty: BTreeSet<Position>,
    black: BTreeSet<Position>,
    white: BTreeSet<Position>,
}

impl StateIndex {
    fn bucket(&self, state: FieldState) -> &BTreeSet<Position> {
        match state {
            FieldState::Empty => &self.empty,
            FieldState::Black => &self.black,
            FieldState::White => &self.white,
        }
    }

    fn bucket_mut(&mut self, state: FieldState) -> &mut BTreeSet<Position> {
        match state {
            FieldState::Empty => &mut self.empty,
            FieldState::Black => &mut self.black,
            FieldState::White => &mut self.white,
        }
    }
}

/// A square N×N Othello board.
///
/// The board exclusively owns every field's state. [`Field`] and [`FieldMut`]
/// are handles borrowing the board, so a field can never outlive or alias
/// the board it belongs to. Cloning produces a fully independent copy.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<FieldState>,
    index: StateIndex,
}

impl Board {
    /// Creates a board with the four centre tokens in standard orientation.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::BoardSize`] if `size` is odd or less than 4.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, OthelloError> {
        if size < MINIMUM_BOARD_SIZE || size % 2 != 0 {
            return Err(OutOfRange::BoardSize(size).into());
        }

        let mut board = Self {
            size,
            cells: vec![FieldState::Empty; size * size],
            index: StateIndex::default(),
        };
        board.index.empty = board.positions().collect();
        board.setup()?;

        debug!(size, "Board created");
        Ok(board)
    }

    /// Places the four centre tokens.
    fn setup(&mut self) -> Result<(), OthelloError> {
        // size >= 4, so the centre is well inside i32 range
        let start = (self.size / 2 - 1) as i32;
        let centre = [
            (Position::new(start, start), FieldState::White),
            (Position::new(start, start + 1), FieldState::Black),
            (Position::new(start + 1, start), FieldState::Black),
            (Position::new(start + 1, start + 1), FieldState::White),
        ];
        for (position, state) in centre {
            self.field_at_mut(position)?.set_state(state)?;
        }
        Ok(())
    }

    /// Returns the edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |column| Position::new(row, column)))
    }

    /// Returns true if the position lies on the board.
    pub fn has_field_at(&self, position: Position) -> bool {
        self.cell_index(position).is_some()
    }

    /// Returns the field at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Position`] if the position is off the board.
    pub fn field_at(&self, position: Position) -> Result<Field<'_>, OthelloError> {
        if self.has_field_at(position) {
            Ok(Field::new(self, position))
        } else {
            Err(self.out_of_range(position))
        }
    }

    /// Returns a mutable handle to the field at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange::Position`] if the position is off the board.
    pub fn field_at_mut(&mut self, position: Position) -> Result<FieldMut<'_>, OthelloError> {
        if self.has_field_at(position) {
            Ok(FieldMut::new(self, position))
        } else {
            Err(self.out_of_range(position))
        }
    }

    /// Returns all fields, row by row.
    pub fn fields(&self) -> Vec<Vec<Field<'_>>> {
        let size = self.size as i32;
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| Field::new(self, Position::new(row, column)))
                    .collect()
            })
            .collect()
    }

    /// Returns the live, read-only index bucket for a state.
    pub fn positions_being(&self, state: FieldState) -> &BTreeSet<Position> {
        self.index.bucket(state)
    }

    /// Iterates over the fields currently in the given state, row-major.
    pub fn fields_being(&self, state: FieldState) -> impl ExactSizeIterator<Item = Field<'_>> + '_ {
        self.index
            .bucket(state)
            .iter()
            .map(move |&position| Field::new(self, position))
    }

    /// Returns the number of fields in the given state.
    pub fn count_being(&self, state: FieldState) -> usize {
        self.index.bucket(state).len()
    }

    /// Returns the number of tokens of a colour.
    pub fn count_tokens(&self, color: Color) -> usize {
        self.count_being(color.field_state())
    }

    /// Returns the state at a position, or `None` off the board.
    pub fn state_at(&self, position: Position) -> Option<FieldState> {
        self.cell_index(position).map(|index| self.cells[index])
    }

    /// Produces a fully independent board with the same field states.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Keeps the state index in sync after a field changed from `old` to `new`.
    pub(super) fn note_state_change(&mut self, old: FieldState, new: FieldState, position: Position) {
        self.index.bucket_mut(old).remove(&position);
        self.index.bucket_mut(new).insert(position);
    }

    /// Overwrites a cell without touching the index.
    ///
    /// Callers must follow up with [`Board::note_state_change`].
    pub(super) fn write_cell(&mut self, position: Position, state: FieldState) {
        if let Some(index) = self.cell_index(position) {
            self.cells[index] = state;
        }
    }

    fn cell_index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row()).ok()?;
        let column = usize::try_from(position.column()).ok()?;
        (row < self.size && column < self.size).then_some(row * self.size + column)
    }

    fn out_of_range(&self, position: Position) -> OthelloError {
        OutOfRange::Position {
            position,
            size: self.size,
        }
        .into()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.cells.hash(state);
    }
}

/// Renders the board as a grid with column letters and 1-based row numbers.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for column in 0..self.size {
            let letter = char::from_u32(u32::from(b'A') + column as u32).unwrap_or('?');
            write!(f, " {}", letter)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:>2}", row + 1)?;
            for state in cells {
                let symbol = match state {
                    FieldState::Empty => '.',
                    FieldState::Black => 'X',
                    FieldState::White => 'O',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_four_centre_tokens() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.count_being(FieldState::Black), 2);
        assert_eq!(board.count_being(FieldState::White), 2);
        assert_eq!(board.count_being(FieldState::Empty), 60);
        assert_eq!(board.state_at(Position::new(3, 3)), Some(FieldState::White));
        assert_eq!(board.state_at(Position::new(3, 4)), Some(FieldState::Black));
        assert_eq!(board.state_at(Position::new(4, 3)), Some(FieldState::Black));
        assert_eq!(board.state_at(Position::new(4, 4)), Some(FieldState::White));
    }

    #[test]
    fn test_cell_index_rejects_negative_and_large() {
        let board = Board::new(4).unwrap();
        assert!(!board.has_field_at(Position::new(-1, 0)));
        assert!(!board.has_field_at(Position::new(0, 4)));
        assert!(board.has_field_at(Position::new(3, 3)));
    }

    #[test]
    fn test_display() {
        let board = Board::new(4).unwrap();
        let expected = "   A B C D\n 1 . . . .\n 2 . O X .\n 3 . X O .\n 4 . . . .\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_note_state_change_moves_between_buckets() {
        let mut board = Board::new(4).unwrap();
        let position = Position::new(0, 0);
        board.write_cell(position, FieldState::Black);
        board.note_state_change(FieldState::Empty, FieldState::Black, position);
        assert!(board.positions_being(FieldState::Black).contains(&position));
        assert!(!board.positions_being(FieldState::Empty).contains(&position));
    }
}
