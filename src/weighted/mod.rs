//! Dynamic weighting search engine.
//!
//! A weighted-A* variant: a single global priority queue ordered by
//! f = g + h + ε·(1 − depth/n²)·h. The heuristic weight decays toward
//! zero as depth approaches n², so the search is greedy early and close
//! to uniform-cost late. Obstacles are *hard*: obstacle cells are never
//! entered, unlike the [`crate::beam`] engine's soft-cost policy.
//!
//! ```rust
//! use marga_nav::weighted;
//! use marga_nav::core::{Cell, Grid};
//!
//! let grid = Grid::new(5, [Cell::new(1, 1)].into_iter().collect());
//! let path = weighted::find_path(&grid, Cell::new(0, 0), Cell::new(4, 4))?;
//! assert!(path.is_some());
//! # Ok::<(), marga_nav::Error>(())
//! ```

mod search;
mod types;

pub use search::{DynamicWeightingConfig, DynamicWeightingPlanner};

use crate::core::{Cell, Grid};
use crate::error::Result;

/// One-shot dynamic weighting search with the default ε = 3.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
    DynamicWeightingPlanner::with_defaults(grid).find_path(start, goal)
}
