//! Bounded breadth-first traversal over an arbitrary adjacency source
//!
//! Both lane-building phases use this: the neighbor mapping walks the
//! physical grid topology, the redundancy check walks the lane graph
//! built so far. Only the adjacency closure differs.

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::core::types::CellId;

/// BFS from `start`, visiting cells up to `max_depth` hops away
///
/// Returns visited cells (excluding `start`) paired with their exact hop
/// distance, in discovery order.
pub fn walk<F, I>(start: CellId, max_depth: usize, mut adjacency: F) -> Vec<(CellId, usize)>
where
    F: FnMut(CellId) -> I,
    I: IntoIterator<Item = CellId>,
{
    let mut visits = Vec::new();
    let mut visited = AHashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0usize));

    while let Some((cell, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for neighbor in adjacency(cell) {
            if visited.insert(neighbor) {
                visits.push((neighbor, depth + 1));
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    visits
}

/// True when `target` is reachable from `start`, searching until found or
/// the graph is exhausted
pub fn connected<F, I>(start: CellId, target: CellId, mut adjacency: F) -> bool
where
    F: FnMut(CellId) -> I,
    I: IntoIterator<Item = CellId>,
{
    if start == target {
        return true;
    }

    let mut visited = AHashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for neighbor in adjacency(cell) {
            if visited.insert(neighbor) {
                if neighbor == target {
                    return true;
                }
                queue.push_back(neighbor);
            }
        }
    }

    false
}
