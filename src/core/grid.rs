//! Square grid model shared by both search engines.

use super::cell::Cell;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// An n×n grid with a set of obstacle cells.
///
/// The grid itself is neutral about what an obstacle means; the two
/// successor generators carry the two policies:
///
/// - [`Grid::neighbors`] returns every in-bounds 4-neighbor, obstacles
///   included. The beam engine uses it and charges obstacle entry through
///   [`Grid::step_cost`] (soft obstacles: passable but penalized).
/// - [`Grid::open_neighbors`] additionally excludes obstacle cells.
///   The dynamic weighting engine uses it (hard obstacles: blocked).
///
/// The two policies are intentionally distinct and must not be merged.
#[derive(Clone, Debug)]
pub struct Grid {
    side: usize,
    obstacles: HashSet<Cell>,
}

/// Movement cost for entering an obstacle cell (beam engine).
pub const OBSTACLE_COST: u32 = 3;

/// Movement cost for entering a free cell.
pub const FREE_COST: u32 = 1;

impl Grid {
    /// Create a grid of side length `side` with the given obstacle cells.
    ///
    /// Obstacle membership is hash-based, so lookups during search are
    /// O(1). Out-of-bounds obstacles are accepted and simply never hit.
    pub fn new(side: usize, obstacles: HashSet<Cell>) -> Self {
        Self { side, obstacles }
    }

    /// Side length n of the n×n grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of obstacle cells.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Is the cell inside the grid?
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.side && cell.col < self.side
    }

    /// Is the cell an obstacle?
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    /// Cost of entering `cell`: obstacles are penalized, not blocked.
    #[inline]
    pub fn step_cost(&self, cell: Cell) -> u32 {
        if self.is_obstacle(cell) {
            OBSTACLE_COST
        } else {
            FREE_COST
        }
    }

    /// Fail with [`Error::OutOfBounds`] unless the cell is inside the grid.
    ///
    /// Used by the engines to reject caller contract violations up front
    /// rather than silently reporting no path.
    pub fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                cell,
                side: self.side,
            })
        }
    }

    /// In-bounds 4-neighbors of a cell, obstacles included.
    ///
    /// Order is fixed (up, down, left, right) so that downstream stable
    /// sorts and tie-breaks are reproducible.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(4);
        if cell.row > 0 {
            out.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.row + 1 < self.side {
            out.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            out.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.side {
            out.push(Cell::new(cell.row, cell.col + 1));
        }
        out
    }

    /// In-bounds, non-obstacle 4-neighbors of a cell.
    pub fn open_neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = self.neighbors(cell);
        out.retain(|c| !self.is_obstacle(*c));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(side: usize, obstacles: &[(usize, usize)]) -> Grid {
        Grid::new(side, obstacles.iter().map(|&(r, c)| Cell::new(r, c)).collect())
    }

    #[test]
    fn bounds() {
        let grid = grid_with(5, &[]);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(4, 4)));
        assert!(!grid.contains(Cell::new(5, 0)));
        assert!(!grid.contains(Cell::new(0, 5)));
        assert!(grid.check_bounds(Cell::new(5, 2)).is_err());
    }

    #[test]
    fn corner_and_interior_neighbors() {
        let grid = grid_with(5, &[]);

        // Corner: only two legal moves.
        assert_eq!(
            grid.neighbors(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );

        // Interior: up, down, left, right in that order.
        assert_eq!(
            grid.neighbors(Cell::new(2, 2)),
            vec![
                Cell::new(1, 2),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(2, 3),
            ]
        );
    }

    #[test]
    fn obstacles_are_soft_in_neighbors_and_hard_in_open_neighbors() {
        let grid = grid_with(5, &[(1, 2)]);

        // Soft view: the obstacle cell is still a legal move, just costly.
        assert!(grid.neighbors(Cell::new(2, 2)).contains(&Cell::new(1, 2)));
        assert_eq!(grid.step_cost(Cell::new(1, 2)), OBSTACLE_COST);
        assert_eq!(grid.step_cost(Cell::new(2, 2)), FREE_COST);

        // Hard view: the obstacle cell is excluded outright.
        assert!(!grid.open_neighbors(Cell::new(2, 2)).contains(&Cell::new(1, 2)));
        assert_eq!(grid.open_neighbors(Cell::new(2, 2)).len(), 3);
    }
}
