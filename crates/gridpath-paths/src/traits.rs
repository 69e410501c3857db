use gridpath_core::{Cell, Dims, Grid};

/// Read-only view of a grid for searching.
pub trait Walkable {
    /// Extent of the grid. Searches reject extents with no cells.
    fn dims(&self) -> Dims;

    /// Whether `c` may be entered. Only called for in-bounds cells.
    fn is_passable(&self, c: Cell) -> bool;
}

impl Walkable for Grid {
    #[inline]
    fn dims(&self) -> Dims {
        Grid::dims(self)
    }

    #[inline]
    fn is_passable(&self, c: Cell) -> bool {
        Grid::is_passable(self, c)
    }
}

/// Estimate of the remaining step count from `from` to `to`.
///
/// Must never overestimate (admissible). A consistent heuristic additionally
/// guarantees that each cell is expanded at most once; the search stays
/// optimal without that property because stale frontier entries are skipped
/// and improved cells are re-queued.
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> u32,
{
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        self(from, to)
    }
}
