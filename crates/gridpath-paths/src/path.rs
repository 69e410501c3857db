use std::fmt;
use std::ops::Deref;

use gridpath_core::Cell;

use crate::traits::Walkable;

/// A route from start to goal, both inclusive. Never empty.
///
/// Dereferences to `[Cell]`, so slice methods (`len`, `first`, `windows`, ...)
/// are available directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// `cells` must be non-empty.
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// The one-cell path of a query whose start is its goal.
    pub fn single(cell: Cell) -> Self {
        Self { cells: vec![cell] }
    }

    /// Number of unit moves, i.e. the path cost.
    #[inline]
    pub fn steps(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Whether every consecutive pair is one axis-aligned step apart and
    /// every cell after the start is in bounds and passable on `grid`.
    pub fn is_valid_on<W: Walkable + ?Sized>(&self, grid: &W) -> bool {
        let dims = grid.dims();
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
            && self.cells[1..]
                .iter()
                .all(|&c| dims.contains(c) && grid.is_passable(c))
    }
}

impl Deref for Path {
    type Target = [Cell];

    fn deref(&self) -> &[Cell] {
        &self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;

    fn cells(pairs: &[(i32, i32)]) -> Vec<Cell> {
        pairs.iter().map(|&p| Cell::from(p)).collect()
    }

    #[test]
    fn single_cell_path() {
        let p = Path::single(Cell::new(2, 3));
        assert_eq!(p.len(), 1);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), p.goal());
    }

    #[test]
    fn steps_and_endpoints() {
        let p = Path::from_cells(cells(&[(0, 0), (0, 1), (1, 1)]));
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), Cell::new(0, 0));
        assert_eq!(p.goal(), Cell::new(1, 1));
        assert_eq!(p.to_string(), "(0, 0) -> (0, 1) -> (1, 1)");
    }

    #[test]
    fn validity_checks_adjacency_and_passability() {
        let grid = Grid::parse("#.\n#.").unwrap();
        // The start may sit on a blocked cell.
        let ok = Path::from_cells(cells(&[(0, 0), (0, 1), (1, 1)]));
        assert!(ok.is_valid_on(&grid));

        let jump = Path::from_cells(cells(&[(0, 1), (1, 0)]));
        assert!(!jump.is_valid_on(&grid));

        let blocked = Path::from_cells(cells(&[(0, 1), (0, 0)]));
        assert!(!blocked.is_valid_on(&grid));

        let outside = Path::from_cells(cells(&[(0, 1), (-1, 1)]));
        assert!(!outside.is_valid_on(&grid));
    }
}
