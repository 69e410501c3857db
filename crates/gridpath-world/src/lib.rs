//! Grid-world simulator for gridpath.
//!
//! A square board with randomly scattered obstacles, an agent that starts in
//! the top-left corner and a goal in the bottom-right corner. Each
//! [`GridWorld::step`] moves the agent one cell and scores the move; the
//! board can also be solved outright with A* through [`GridWorld::plan`].

pub mod action;
pub mod config;
pub mod error;
pub mod world;

pub use action::{Action, Observation};
pub use config::WorldConfig;
pub use error::WorldError;
pub use world::{
    EpisodeSummary, GOAL_REWARD, GridWorld, INVALID_MOVE_REWARD, STEP_REWARD, StepOutcome,
};
