//! Board coordinates.

use derive_more::Display;
use std::fmt;
use std::str::FromStr;

/// A zero-based (row, column) coordinate.
///
/// Positions are plain values: they are not bounds-checked on construction
/// and may point off the board. The board decides whether a position exists.
///
/// Ordering is row-major, which is the enumeration order of every board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns the zero-based row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Returns the zero-based column.
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Returns the position shifted by the given offsets.
    pub fn offset(self, row_offset: i32, column_offset: i32) -> Self {
        Self::new(self.row + row_offset, self.column + column_offset)
    }
}

/// Renders as column letter plus 1-based row, e.g. `B1` for (0, 1).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = u32::try_from(i64::from(b'A') + i64::from(self.column))
            .ok()
            .and_then(char::from_u32)
            .unwrap_or('?');
        write!(f, "{}{}", letter, i64::from(self.row) + 1)
    }
}

/// Error returned when a string is not in `<letter><row>` notation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("invalid position notation '{}'", _0)]
pub struct ParsePositionError(String);

impl std::error::Error for ParsePositionError {}

/// Parses `<letter><1-based row>` notation, e.g. `"E8"` or `"b1"`.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(err)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(err());
        }
        let row: i32 = chars.as_str().parse().map_err(|_| err())?;
        if row < 1 {
            return Err(err());
        }
        let column = i32::from(letter as u8 - b'A');
        Ok(Self::new(row - 1, column))
    }
}
