use thiserror::Error;

use crate::geom::Dims;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero or negative.
    #[error("grid must be at least 1x1, got {0}")]
    Empty(Dims),

    /// The number of supplied values does not match `rows * cols`.
    #[error("grid {dims} needs {expected} values, got {found}")]
    ValueCount {
        dims: Dims,
        expected: usize,
        found: usize,
    },

    /// Rows of a parsed grid have different widths.
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `.` or `#` was found while parsing.
    #[error("invalid grid character \u{201c}{ch}\u{201d} at ({row}, {col})")]
    InvalidChar { ch: char, row: usize, col: usize },
}
