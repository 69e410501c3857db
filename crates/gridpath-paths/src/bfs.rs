use std::collections::VecDeque;

use gridpath_core::{Cell, Dims};

use crate::error::{Endpoint, PathError, validate};
use crate::traits::Walkable;

const UNREACHED: u32 = u32::MAX;

/// Unit-cost distances from a single source, as produced by [`bfs_distances`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    dims: Dims,
    source: Cell,
    dist: Vec<u32>,
}

impl DistanceMap {
    /// The cell distances were measured from.
    pub fn source(&self) -> Cell {
        self.source
    }

    /// Step count from the source to `c`, or `None` if `c` is out of bounds
    /// or unreachable.
    pub fn at(&self, c: Cell) -> Option<u32> {
        self.dims
            .index(c)
            .map(|i| self.dist[i])
            .filter(|&d| d != UNREACHED)
    }

    /// Number of cells reached, the source included.
    pub fn reachable(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHED).count()
    }
}

/// Breadth-first distances from `source` to every reachable passable cell.
///
/// The source itself is trusted and gets distance 0 even when blocked.
pub fn bfs_distances<W: Walkable + ?Sized>(
    grid: &W,
    source: Cell,
) -> Result<DistanceMap, PathError> {
    let dims = validate(grid, &[(Endpoint::Start, source)])?;
    let mut dist = vec![UNREACHED; dims.len()];
    let mut queue = VecDeque::new();

    if let Some(si) = dims.index(source) {
        dist[si] = 0;
        queue.push_back(source);
    }

    while let Some(cp) = queue.pop_front() {
        let Some(ci) = dims.index(cp) else {
            continue;
        };
        let nd = dist[ci] + 1;
        for np in cp.neighbors_4() {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHED || !grid.is_passable(np) {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(np);
        }
    }

    Ok(DistanceMap { dims, source, dist })
}

/// Length in steps of a shortest path, or `None` when `goal` is unreachable.
///
/// Validates both endpoints the same way [`PathFinder`](crate::PathFinder)
/// does, so the two can be compared directly.
pub fn shortest_steps<W: Walkable + ?Sized>(
    grid: &W,
    start: Cell,
    goal: Cell,
) -> Result<Option<u32>, PathError> {
    validate(grid, &[(Endpoint::Start, start), (Endpoint::Goal, goal)])?;
    if start == goal {
        return Ok(Some(0));
    }
    Ok(bfs_distances(grid, start)?.at(goal))
}
