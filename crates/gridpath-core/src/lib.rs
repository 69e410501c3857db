//! **gridpath-core** — core types shared across the *gridpath* workspace.
//!
//! This crate provides the coordinate type [`Cell`], grid extents [`Dims`],
//! and the passability [`Grid`] that searches read and the simulator mutates
//! between episodes.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Cell, Dims, DimsIter};
pub use grid::{CellState, Grid};
