//! Grid cell coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell on the square grid, addressed as (row, column).
///
/// Coordinates are 0-indexed and always non-negative; bounds checking
/// against a concrete grid size lives in [`crate::core::Grid`].
/// Equality and hashing are by coordinate, so `Cell` works directly as
/// a key in hash-based sets and maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Cell {
    /// Create a cell at (row, col).
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_and_hash_by_coordinate() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Cell::new(2, 3));
        set.insert(Cell::new(2, 3));
        set.insert(Cell::new(3, 2));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&Cell::new(2, 3)));
    }

    #[test]
    fn display_format() {
        assert_eq!(Cell::new(1, 4).to_string(), "(1, 4)");
    }
}
