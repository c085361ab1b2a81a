//! Priority queue entry for the dynamic weighting engine.

use crate::core::Cell;
use std::cmp::Ordering;

/// An entry in the open queue.
///
/// `seq` is a monotonically increasing push counter: entries with equal
/// `f` pop in insertion order, which fixes the tie-break so identical
/// inputs always produce identical paths. The queue may hold several
/// stale entries for one cell; the relaxation loop tolerates them.
#[derive(Clone, Debug)]
pub(super) struct HeapEntry {
    /// Weighted priority f = g + h + ε·(1 − depth/n²)·h.
    pub f: f64,
    /// Grid position.
    pub cell: Cell,
    /// Expansion depth at which this entry was pushed.
    pub depth: usize,
    /// Push counter, used as the f tie-break.
    pub seq: u64,
}

impl Eq for HeapEntry {}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; `f` is never NaN.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(f: f64, seq: u64) -> HeapEntry {
        HeapEntry {
            f,
            cell: Cell::new(0, 0),
            depth: 0,
            seq,
        }
    }

    #[test]
    fn pops_smallest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 0));
        heap.push(entry(1.0, 1));
        heap.push(entry(2.0, 2));

        assert_eq!(heap.pop().unwrap().f, 1.0);
        assert_eq!(heap.pop().unwrap().f, 2.0);
        assert_eq!(heap.pop().unwrap().f, 3.0);
    }

    #[test]
    fn equal_f_pops_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1.5, 0));
        heap.push(entry(1.5, 1));
        heap.push(entry(1.5, 2));

        assert_eq!(heap.pop().unwrap().seq, 0);
        assert_eq!(heap.pop().unwrap().seq, 1);
        assert_eq!(heap.pop().unwrap().seq, 2);
    }
}
