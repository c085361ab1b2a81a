//! Distance heuristic for the search engines.

use super::cell::Cell;

/// Manhattan distance between two cells.
///
/// Admissible for 4-directional unit-cost movement: it never exceeds the
/// true remaining cost. Both engines relax that guarantee (the beam
/// engine charges obstacle cells extra, the dynamic weighting engine
/// scales the estimate) but the base metric stays the same. Always
/// non-negative, zero only when `a == b`.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_only_at_same_cell() {
        assert_eq!(manhattan(Cell::new(3, 3), Cell::new(3, 3)), 0);
        assert_eq!(manhattan(Cell::new(3, 3), Cell::new(3, 4)), 1);
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(4, 4)), 8);
    }

    #[test]
    fn symmetric() {
        let a = Cell::new(1, 7);
        let b = Cell::new(5, 2);
        assert_eq!(manhattan(a, b), manhattan(b, a));
        assert_eq!(manhattan(a, b), 9);
    }
}
