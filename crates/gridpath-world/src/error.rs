use gridpath_core::GridError;
use gridpath_paths::PathError;
use thiserror::Error;

/// Errors raised by the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("invalid world config: {0}")]
    InvalidConfig(String),

    #[error("unknown action code {0}, expected 0..=3")]
    InvalidAction(u8),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Path(#[from] PathError),
}
