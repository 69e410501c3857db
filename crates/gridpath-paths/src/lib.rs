//! Shortest-path search on 4-connected passability grids.
//!
//! - **A\*** with a pluggable admissible heuristic ([`PathFinder::find_path`])
//! - **BFS** unit-cost distance maps ([`bfs_distances`], [`shortest_steps`])
//!
//! Every call allocates its own working state (frontier, cost table,
//! predecessors) and drops it on return, so one [`PathFinder`] can serve
//! concurrent searches over a shared grid.
//!
//! # Traits
//!
//! | Trait | Role |
//! |---|---|
//! | [`Walkable`] | grid extent and passability, implemented for [`gridpath_core::Grid`] |
//! | [`Heuristic`] | remaining-cost estimate, [`Manhattan`] by default |

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod path;
mod traits;

pub use astar::PathFinder;
pub use bfs::{DistanceMap, bfs_distances, shortest_steps};
pub use distance::{Manhattan, manhattan};
pub use error::{Endpoint, PathError};
pub use frontier::Frontier;
pub use path::Path;
pub use traits::{Heuristic, Walkable};
