//! Dynamic weighting search planner.

use super::types::HeapEntry;
use crate::core::{manhattan, Cell, Grid};
use crate::error::Result;
use std::collections::{BinaryHeap, HashMap};

/// Configuration for the dynamic weighting engine.
#[derive(Clone, Copy, Debug)]
pub struct DynamicWeightingConfig {
    /// Heuristic weight ε at depth 0.
    ///
    /// The effective weight decays linearly with depth,
    /// ε·(1 − depth/n²), so the search is greedy near the start and
    /// behaves more like plain A* as it goes deeper.
    pub epsilon: f64,
}

impl Default for DynamicWeightingConfig {
    fn default() -> Self {
        Self { epsilon: 3.0 }
    }
}

impl DynamicWeightingConfig {
    /// Config with a custom starting weight.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

/// Relax an edge `current -> next` with cost `tentative_g`.
///
/// Updates the score and predecessor maps only when `next` is newly
/// discovered or the new route is strictly cheaper, so a cell's recorded
/// g is non-increasing over the life of a search. Returns whether the
/// entry changed.
fn relax(
    g_score: &mut HashMap<Cell, u32>,
    came_from: &mut HashMap<Cell, Cell>,
    current: Cell,
    next: Cell,
    tentative_g: u32,
) -> bool {
    match g_score.get(&next) {
        Some(&g) if tentative_g >= g => false,
        _ => {
            g_score.insert(next, tentative_g);
            came_from.insert(next, current);
            true
        }
    }
}

/// Weighted-A*-style search with a depth-decaying heuristic weight.
///
/// A single global min-queue ordered by
/// f = g + h + ε·(1 − depth/n²)·h drives the expansion; obstacles are
/// hard-blocked. Stale queue entries for already-improved cells are
/// popped and re-expanded harmlessly; relaxation is idempotent, so they
/// only cost wasted work. The search terminates when the goal is popped
/// or the queue drains (grid is finite, step costs are positive).
pub struct DynamicWeightingPlanner<'a> {
    grid: &'a Grid,
    config: DynamicWeightingConfig,
}

impl<'a> DynamicWeightingPlanner<'a> {
    /// Create a planner over the given grid.
    pub fn new(grid: &'a Grid, config: DynamicWeightingConfig) -> Self {
        Self { grid, config }
    }

    /// Create a planner with the default ε = 3.
    pub fn with_defaults(grid: &'a Grid) -> Self {
        Self::new(grid, DynamicWeightingConfig::default())
    }

    /// Search for a path from `start` to `goal`.
    ///
    /// Returns `Ok(Some(path))` from `start` to `goal` inclusive,
    /// `Ok(None)` when the queue drains without reaching the goal, or
    /// [`crate::Error::OutOfBounds`] when either endpoint violates the
    /// grid bounds.
    pub fn find_path(&self, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
        let grid = self.grid;
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;

        let cells = (grid.side() * grid.side()) as f64;
        let epsilon = self.config.epsilon;

        let mut open = BinaryHeap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut g_score: HashMap<Cell, u32> = HashMap::new();
        let mut seq: u64 = 0;

        g_score.insert(start, 0);
        open.push(HeapEntry {
            f: 0.0,
            cell: start,
            depth: 0,
            seq,
        });

        while let Some(entry) = open.pop() {
            let current = entry.cell;

            if current == goal {
                let mut path = vec![current];
                let mut cursor = current;
                while let Some(&prev) = came_from.get(&cursor) {
                    path.push(prev);
                    cursor = prev;
                }
                path.reverse();
                return Ok(Some(path));
            }

            let current_g = g_score[&current];

            for successor in grid.open_neighbors(current) {
                let tentative_g = current_g + 1;
                if relax(&mut g_score, &mut came_from, current, successor, tentative_g) {
                    let h = manhattan(successor, goal) as f64;
                    let f = tentative_g as f64 + h + epsilon * (1.0 - entry.depth as f64 / cells) * h;
                    seq += 1;
                    open.push(HeapEntry {
                        f,
                        cell: successor,
                        depth: entry.depth + 1,
                        seq,
                    });
                }
            }
        }

        Ok(None)
    }
}
