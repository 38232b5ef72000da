//! A* search over a terrain grid.

use std::collections::BinaryHeap;

use log::debug;
use terra_core::{Cell, CostTable, TerrainGrid};

use crate::distance::Metric;
use crate::error::PathError;
use crate::neighbors::Neighbors;
use crate::node::{OpenEntry, Parent, SearchNode};

/// Compute a shortest-cost path from `start` to `end`.
///
/// Both endpoints are validated against the grid bounds. The returned
/// path includes both endpoints and visits no cell twice; `start == end`
/// yields the singleton `[start]`. The selected `metric` feeds both the
/// step cost and the heuristic for the whole invocation.
///
/// The search runs to completion on the calling thread and owns all of
/// its bookkeeping, so concurrent calls against read-only grids need no
/// locking.
pub fn find_path(
    grid: &TerrainGrid,
    costs: &CostTable,
    start: Cell,
    end: Cell,
    metric: Metric,
) -> Result<Vec<Cell>, PathError> {
    for endpoint in [start, end] {
        if !grid.contains(endpoint) {
            return Err(PathError::OutOfBounds {
                cell: endpoint,
                size: grid.size(),
            });
        }
    }
    if start == end {
        return Ok(vec![start]);
    }

    // Per-call bookkeeping: one node per grid cell in a flat arena
    // addressed by the grid's row-major index, plus a closed-set flag
    // array. Dropped when the call returns.
    let mut nodes = vec![SearchNode::default(); grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut neighbors = Neighbors::new();

    let start_idx = grid.idx(start);
    let end_idx = grid.idx(end);
    nodes[start_idx].parent = Parent::Root;
    open.push(OpenEntry {
        idx: start_idx,
        f: 0.0,
        h: 0.0,
    });

    let mut expanded = 0usize;
    let mut found = false;

    while let Some(&top) = open.peek() {
        // Stop once the goal reaches the head of the frontier.
        if top.idx == end_idx {
            found = true;
            break;
        }
        open.pop();

        // Improvements push fresh entries rather than re-keying old
        // ones; stale entries are skipped here via the closed set.
        let ci = top.idx;
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        expanded += 1;

        let current = cell_of(grid, ci);
        for &n in neighbors.around(current, grid) {
            let ni = grid.idx(n);
            if closed[ni] {
                continue;
            }

            // g is the single-step distance from the current cell; h is
            // the metric distance to the goal plus the terrain cost of
            // entering the neighbor.
            let g_new = metric.between(current, n);
            let h_new = metric.between(n, end) + costs.cost(grid.at(n));

            let node = &mut nodes[ni];
            let improves =
                matches!(node.parent, Parent::Unvisited) || g_new + h_new < node.f();
            if improves {
                *node = SearchNode {
                    g: g_new,
                    h: h_new,
                    parent: Parent::Step(current),
                };
                open.push(OpenEntry {
                    idx: ni,
                    f: g_new + h_new,
                    h: h_new,
                });
            }
        }
    }

    if !found {
        debug!("no path from {start} to {end}, {expanded} cells expanded");
        return Err(PathError::NotFound { start, end });
    }

    // Walk the parent chain back from the goal. Every cell on the chain
    // was written during the search, and the chain terminates at the
    // start cell's root marker.
    let mut path = Vec::new();
    let mut current = end;
    loop {
        path.push(current);
        match nodes[grid.idx(current)].parent {
            Parent::Root => break,
            Parent::Step(prev) => current = prev,
            Parent::Unvisited => unreachable!("parent chain reached an unvisited cell"),
        }
    }
    path.reverse();

    debug!(
        "path from {start} to {end}: {} cells, {expanded} expanded",
        path.len()
    );
    Ok(path)
}

#[inline]
fn cell_of(grid: &TerrainGrid, idx: usize) -> Cell {
    Cell::new((idx % grid.size()) as i32, (idx / grid.size()) as i32)
}
