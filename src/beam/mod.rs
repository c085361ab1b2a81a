//! Adaptive beam search engine.
//!
//! A pruned, layer-by-layer search: every iteration expands the current
//! frontier, ranks all successors by f = g + h, and keeps only the best K
//! as the next frontier. K is chosen by [`beam_width`] from the board size
//! and obstacle density. Obstacles are *soft*: entering one is legal but
//! costs 3 instead of 1.
//!
//! ```rust
//! use marga_nav::beam;
//! use marga_nav::core::{Cell, Grid};
//!
//! let grid = Grid::new(5, [Cell::new(1, 1)].into_iter().collect());
//! let path = beam::find_path(&grid, Cell::new(0, 0), Cell::new(4, 4))?;
//! assert!(path.is_some());
//! # Ok::<(), marga_nav::Error>(())
//! ```

mod search;
mod types;

pub use search::{beam_width, BeamPlanner};

use crate::core::{Cell, Grid};
use crate::error::Result;

/// One-shot beam search over a grid.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
    BeamPlanner::new(grid).find_path(start, goal)
}
