use std::fmt;

use gridpath_core::{Cell, Dims};
use thiserror::Error;

use crate::traits::Walkable;

/// Which end of a query a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Precondition failures and aborted searches.
///
/// An unreachable goal is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("{endpoint} {cell} is outside the {dims} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        dims: Dims,
    },

    #[error("grid must be at least 1x1, got {0}")]
    InvalidGrid(Dims),

    #[error("search gave up after expanding {expanded} cells")]
    BudgetExhausted { expanded: usize },
}

/// Check the grid extent and every endpoint, returning the extent.
pub(crate) fn validate<W: Walkable + ?Sized>(
    grid: &W,
    endpoints: &[(Endpoint, Cell)],
) -> Result<Dims, PathError> {
    let dims = grid.dims();
    if dims.is_empty() {
        return Err(PathError::InvalidGrid(dims));
    }
    for &(endpoint, cell) in endpoints {
        if !dims.contains(cell) {
            return Err(PathError::OutOfBounds {
                endpoint,
                cell,
                dims,
            });
        }
    }
    Ok(dims)
}
