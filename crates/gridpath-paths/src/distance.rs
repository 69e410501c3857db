use gridpath_core::Cell;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.manhattan(b)
}

/// The L1 heuristic. Admissible and consistent for unit-cost 4-connected moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        manhattan(from, to)
    }
}
