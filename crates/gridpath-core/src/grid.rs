//! The [`Grid`] type — a rectangular field of passable and blocked cells.
//!
//! A `Grid` owns its cells in a flat row-major `Vec`. Searches borrow it
//! shared, so it cannot change while a search is running and can be read
//! from several threads at once.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Cell, Dims};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Passable,
    Blocked,
}

impl CellState {
    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }

    /// ASCII glyph used by [`Grid::parse`] and the [`Display`](fmt::Display) impl.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Passable => '.',
            Self::Blocked => '#',
        }
    }
}

impl From<i32> for CellState {
    /// `0` is passable, any other value is blocked.
    fn from(v: i32) -> Self {
        if v == 0 { Self::Passable } else { Self::Blocked }
    }
}

impl From<CellState> for i32 {
    fn from(s: CellState) -> Self {
        match s {
            CellState::Passable => 0,
            CellState::Blocked => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows x cols` field of [`CellState`]s. Always at least 1x1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct Grid {
    dims: Dims,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-passable grid.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Self::filled(rows, cols, CellState::Passable)
    }

    /// Create a grid with every cell set to `state`.
    pub fn filled(rows: i32, cols: i32, state: CellState) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::Empty(dims));
        }
        Ok(Self {
            dims,
            cells: vec![state; dims.len()],
        })
    }

    /// Build a grid from row-major integer values: `0` is passable, anything
    /// else is blocked.
    pub fn from_values(rows: i32, cols: i32, values: &[i32]) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::Empty(dims));
        }
        if values.len() != dims.len() {
            return Err(GridError::ValueCount {
                dims,
                expected: dims.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            dims,
            cells: values.iter().map(|&v| CellState::from(v)).collect(),
        })
    }

    /// Parse an ASCII picture: `.` is passable, `#` is blocked.
    ///
    /// Blank lines and surrounding whitespace on each line are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let state = match ch {
                    '.' => CellState::Passable,
                    '#' => CellState::Blocked,
                    _ => return Err(GridError::InvalidChar { ch, row: rows, col }),
                };
                cells.push(state);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: rows,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let dims = Dims::new(rows as i32, width.unwrap_or(0) as i32);
        if dims.is_empty() {
            return Err(GridError::Empty(dims));
        }
        Ok(Self { dims, cells })
    }

    /// Extent of the grid.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.dims.contains(c)
    }

    /// State at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<CellState> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.at(c).is_some_and(CellState::is_passable)
    }

    /// Set the state at `c`. Returns `false` (and does nothing) if out of bounds.
    pub fn set(&mut self, c: Cell, state: CellState) -> bool {
        match self.dims.index(c) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Count the cells equal to `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterate over `(Cell, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Row-major integer view: `0` passable, `1` blocked.
    pub fn to_values(&self) -> Vec<i32> {
        self.cells.iter().map(|&s| i32::from(s)).collect()
    }
}

/// Unvalidated wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    dims: Dims,
    cells: Vec<CellState>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        if repr.dims.is_empty() {
            return Err(GridError::Empty(repr.dims));
        }
        if repr.cells.len() != repr.dims.len() {
            return Err(GridError::ValueCount {
                dims: repr.dims,
                expected: repr.dims.len(),
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            dims: repr.dims,
            cells: repr.cells,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{}", s.glyph())?;
            }
        }
        Ok(())
    }
}
