//! Internal per-cell bookkeeping for the A* search.

use terra_core::Cell;

/// Predecessor marker for a search node.
///
/// The three states are explicit so that "never touched by the search"
/// and "root of the parent chain" can never be confused during path
/// reconstruction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Parent {
    /// The search has not written this node.
    #[default]
    Unvisited,
    /// The start cell, where reconstruction terminates.
    Root,
    /// Best-known predecessor on the path from the start.
    Step(Cell),
}

/// Per-cell scores, one per grid cell in a flat arena addressed by the
/// grid's row-major index.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct SearchNode {
    pub(crate) g: f32,
    pub(crate) h: f32,
    pub(crate) parent: Parent,
}

impl SearchNode {
    /// Priority of the node; lower explores first.
    #[inline]
    pub(crate) fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Frontier entry, ordered for use in a `BinaryHeap`.
///
/// Reversed so the max-heap pops the smallest `f` first. Ties break on
/// smaller `h` (closer to the goal), then smaller index, giving a fixed
/// deterministic pop order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f32,
    pub(crate) h: f32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then(other.h.total_cmp(&self.h))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OpenEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { idx: 0, f: 5.0, h: 1.0 });
        heap.push(OpenEntry { idx: 1, f: 2.0, h: 1.0 });
        heap.push(OpenEntry { idx: 2, f: 9.0, h: 1.0 });
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 0);
        assert_eq!(heap.pop().unwrap().idx, 2);
    }

    #[test]
    fn equal_f_prefers_smaller_h() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { idx: 0, f: 4.0, h: 3.0 });
        heap.push(OpenEntry { idx: 1, f: 4.0, h: 2.0 });
        assert_eq!(heap.pop().unwrap().idx, 1);
    }

    #[test]
    fn equal_f_and_h_prefers_smaller_idx() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { idx: 7, f: 4.0, h: 2.0 });
        heap.push(OpenEntry { idx: 3, f: 4.0, h: 2.0 });
        assert_eq!(heap.pop().unwrap().idx, 3);
    }

    #[test]
    fn default_node_is_unvisited() {
        let node = SearchNode::default();
        assert_eq!(node.parent, Parent::Unvisited);
        assert_eq!(node.f(), 0.0);
    }
}
