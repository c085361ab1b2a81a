//! Beam search planner.

use super::types::{ExpansionHistory, SearchNode};
use crate::core::{manhattan, Cell, Grid};
use crate::error::Result;
use std::collections::HashSet;

/// Adaptive beam width from grid size and obstacle count.
///
/// Base width is a step function of the side length (wider beams for
/// small boards), scaled up when the obstacle density is high enough
/// that detours need more breadth to survive pruning. Both density
/// boundaries are strict (`> 0.4`, `> 0.2`); a density of exactly 0.2
/// takes the 1.0 multiplier. The result is truncated to an integer and
/// clamped to [3, 10].
pub fn beam_width(side: usize, obstacle_count: usize) -> usize {
    let density = obstacle_count as f32 / (side * side) as f32;

    let base = if side <= 10 {
        5
    } else if side <= 30 {
        4
    } else {
        3
    };

    let multiplier = if density > 0.4 {
        1.5
    } else if density > 0.2 {
        1.2
    } else {
        1.0
    };

    ((base as f32 * multiplier) as usize).clamp(3, 10)
}

/// Layer-by-layer beam search over a [`Grid`].
///
/// Each iteration expands every frontier node into its legal successors,
/// ranks all candidates by f = g + h, and keeps only the best
/// [`beam_width`] of them as the next frontier. Obstacles are soft: a
/// successor on an obstacle cell is legal but costs
/// [`crate::core::OBSTACLE_COST`] instead of [`crate::core::FREE_COST`].
///
/// The search never reopens a cell: once a position has entered the
/// expansion history it is skipped on rediscovery, even when the second
/// route is cheaper. Combined with the pruning this trades completeness
/// and optimality for speed, so `Ok(None)` is a normal outcome even on
/// boards where a path exists.
pub struct BeamPlanner<'a> {
    grid: &'a Grid,
}

impl<'a> BeamPlanner<'a> {
    /// Create a planner over the given grid.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Search for a path from `start` to `goal`.
    ///
    /// Returns `Ok(Some(path))` with the path running from `start` to
    /// `goal` inclusive, `Ok(None)` when the frontier starves or the
    /// iteration cap of 2n² is hit, or [`crate::Error::OutOfBounds`]
    /// when either endpoint violates the grid bounds.
    pub fn find_path(&self, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
        let grid = self.grid;
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;

        let mut history = ExpansionHistory::default();
        let mut visited: HashSet<Cell> = HashSet::new();

        let root = history.push(SearchNode {
            cell: start,
            parent: None,
            g: 0,
            h: manhattan(start, goal),
        });
        visited.insert(start);

        if start == goal {
            return Ok(Some(vec![start]));
        }

        let width = beam_width(grid.side(), grid.obstacle_count());
        let max_iterations = 2 * grid.side() * grid.side();
        let mut frontier = vec![root];

        for _ in 0..max_iterations {
            let mut candidates: Vec<SearchNode> = Vec::new();

            for &index in &frontier {
                let (cell, g) = {
                    let node = history.get(index);
                    (node.cell, node.g)
                };

                for successor in grid.neighbors(cell) {
                    let g_next = g + grid.step_cost(successor);
                    let h_next = manhattan(successor, goal);

                    if successor == goal {
                        let goal_index = history.push(SearchNode {
                            cell: successor,
                            parent: Some(index),
                            g: g_next,
                            h: h_next,
                        });
                        return Ok(Some(history.reconstruct(goal_index)));
                    }

                    // Visited-once policy: rediscoveries are dropped even
                    // when reached more cheaply. The set only covers
                    // nodes already in the history, so duplicates within
                    // one layer all stay candidates.
                    if visited.contains(&successor) {
                        continue;
                    }

                    candidates.push(SearchNode {
                        cell: successor,
                        parent: Some(index),
                        g: g_next,
                        h: h_next,
                    });
                }
            }

            if candidates.is_empty() {
                return Ok(None);
            }

            // Stable sort on an integer key keeps ties in generation
            // order, which makes results deterministic.
            candidates.sort_by_key(SearchNode::f);
            candidates.truncate(width);

            frontier.clear();
            for node in candidates {
                visited.insert(node.cell);
                frontier.push(history.push(node));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid_with(side: usize, obstacles: &[(usize, usize)]) -> Grid {
        Grid::new(side, obstacles.iter().map(|&(r, c)| Cell::new(r, c)).collect())
    }

    fn assert_unit_steps(path: &[Cell], start: Cell, goal: Cell) {
        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), goal);
        for pair in path.windows(2) {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            assert_eq!(dr + dc, 1, "non-unit step {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn width_table() {
        // Base step function, multiplier 1.0.
        assert_eq!(beam_width(5, 0), 5);
        assert_eq!(beam_width(10, 0), 5);
        assert_eq!(beam_width(30, 0), 4);
        assert_eq!(beam_width(31, 0), 3);
        assert_eq!(beam_width(100, 0), 3);

        // Density boundaries are strict: exactly 0.2 is still sparse.
        assert_eq!(beam_width(5, 5), 5);
        assert_eq!(beam_width(5, 6), 6); // 0.24 -> 1.2 multiplier
        assert_eq!(beam_width(5, 11), 7); // 0.44 -> 1.5 multiplier
        assert_eq!(beam_width(10, 45), 7);

        // Truncation, then clamp to [3, 10].
        assert_eq!(beam_width(50, 1200), 4); // 3 * 1.5 = 4.5 -> 4
    }

    #[test]
    fn start_equals_goal() {
        let grid = grid_with(5, &[(1, 1)]);
        let planner = BeamPlanner::new(&grid);
        let path = planner.find_path(Cell::new(2, 2), Cell::new(2, 2)).unwrap();
        assert_eq!(path, Some(vec![Cell::new(2, 2)]));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let grid = grid_with(5, &[]);
        let planner = BeamPlanner::new(&grid);
        assert!(planner.find_path(Cell::new(0, 0), Cell::new(5, 5)).is_err());
        assert!(planner.find_path(Cell::new(9, 0), Cell::new(4, 4)).is_err());
    }

    #[test]
    fn reference_board() {
        // 5x5 board with five obstacles; Manhattan lower bound is 9 cells
        // including the start, and the beam finds exactly that.
        let grid = grid_with(5, &[(1, 1), (2, 0), (2, 3), (3, 1), (4, 2)]);
        let planner = BeamPlanner::new(&grid);
        let path = planner
            .find_path(Cell::new(0, 0), Cell::new(4, 4))
            .unwrap()
            .expect("path exists");

        assert!(path.len() <= 9);
        assert_unit_steps(&path, Cell::new(0, 0), Cell::new(4, 4));
    }

    #[test]
    fn empty_board_takes_shortest_route() {
        let grid = grid_with(5, &[]);
        let planner = BeamPlanner::new(&grid);
        let path = planner
            .find_path(Cell::new(0, 0), Cell::new(4, 4))
            .unwrap()
            .expect("path exists");

        assert_eq!(path.len(), 9);
        assert_unit_steps(&path, Cell::new(0, 0), Cell::new(4, 4));
    }

    #[test]
    fn soft_obstacles_allow_passing_through_a_ring() {
        // The goal is fully encircled; the beam engine may still enter
        // obstacle cells at a cost, so a path exists.
        let grid = grid_with(5, &[(1, 2), (3, 2), (2, 1), (2, 3)]);
        let planner = BeamPlanner::new(&grid);
        let path = planner
            .find_path(Cell::new(0, 0), Cell::new(2, 2))
            .unwrap()
            .expect("soft obstacles are passable");

        assert_unit_steps(&path, Cell::new(0, 0), Cell::new(2, 2));
        assert!(path.iter().any(|c| grid.is_obstacle(*c)));
    }

    #[test]
    fn crosses_a_full_wall_by_paying_the_penalty() {
        let obstacles: Vec<(usize, usize)> = (0..6).map(|r| (r, 3)).collect();
        let grid = grid_with(7, &obstacles);
        let planner = BeamPlanner::new(&grid);
        let path = planner
            .find_path(Cell::new(0, 0), Cell::new(0, 6))
            .unwrap()
            .expect("wall is soft");

        assert_eq!(path.len(), 7);
        assert_unit_steps(&path, Cell::new(0, 0), Cell::new(0, 6));
    }

    #[test]
    fn deterministic() {
        let grid = grid_with(5, &[(1, 1), (2, 0), (2, 3), (3, 1), (4, 2)]);
        let planner = BeamPlanner::new(&grid);
        let first = planner.find_path(Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        let second = planner.find_path(Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn returned_path_has_no_revisits() {
        let grid = grid_with(5, &[(1, 1), (2, 0), (2, 3), (3, 1), (4, 2)]);
        let planner = BeamPlanner::new(&grid);
        let path = planner
            .find_path(Cell::new(0, 0), Cell::new(4, 4))
            .unwrap()
            .expect("path exists");

        let distinct: HashSet<_> = path.iter().collect();
        assert_eq!(distinct.len(), path.len());
    }
}
