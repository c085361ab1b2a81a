//! Beam search node and expansion history types.

use crate::core::Cell;

/// A node in the expansion history.
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    /// Grid position of this node.
    pub cell: Cell,
    /// Index of the parent node in the history; `None` for the root.
    pub parent: Option<usize>,
    /// Accumulated movement cost from the start.
    pub g: u32,
    /// Manhattan estimate to the goal.
    pub h: u32,
}

impl SearchNode {
    /// Ranking score f = g + h.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Append-only arena of expanded nodes.
///
/// Parent links are indices into the same vector rather than references,
/// so the structure has no cycles and path reconstruction is a reverse
/// index walk. Indices are assigned monotonically and never reused; every
/// non-root parent index refers to an earlier node.
#[derive(Debug, Default)]
pub(super) struct ExpansionHistory {
    nodes: Vec<SearchNode>,
}

impl ExpansionHistory {
    /// Append a node and return its index.
    pub fn push(&mut self, node: SearchNode) -> usize {
        debug_assert!(node.parent.map_or(true, |p| p < self.nodes.len()));
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Node at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    /// Walk parent indices from `index` back to the root and return the
    /// cells in start-to-goal order.
    pub fn reconstruct(&self, index: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            path.push(node.cell);
            current = node.parent;
        }
        path.reverse();
        path
    }
}
