//! The eight compass directions used for line scanning.

use super::Position;

/// A compass direction, each carrying a unit (row, column) offset.
///
/// North points towards row 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// One row up.
    North,
    /// One row up, one column right.
    NorthEast,
    /// One column right.
    East,
    /// One row down, one column right.
    SouthEast,
    /// One row down.
    South,
    /// One row down, one column left.
    SouthWest,
    /// One column left.
    West,
    /// One row up, one column left.
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Returns the (row, column) offset of one step.
    pub fn offsets(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Moves `origin` one step in this direction.
    pub fn step(self, origin: Position) -> Position {
        let (row_offset, column_offset) = self.offsets();
        origin.offset(row_offset, column_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_iteration_order() {
        let iterated: Vec<Direction> = Direction::iter().collect();
        assert_eq!(iterated, Direction::ALL.to_vec());
    }

    #[test]
    fn test_offsets_are_unit_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for direction in Direction::ALL {
            let (dr, dc) = direction.offsets();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!((dr, dc) != (0, 0));
            assert!(seen.insert((dr, dc)));
        }
    }

    #[test]
    fn test_step() {
        let origin = Position::new(3, 3);
        assert_eq!(Direction::North.step(origin), Position::new(2, 3));
        assert_eq!(Direction::SouthWest.step(origin), Position::new(4, 2));
    }
}
