//! The episodic stepper.

use std::fmt;

use gridpath_core::{Cell, CellState, Grid};
use gridpath_paths::{Path, PathError, PathFinder, shortest_steps};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::{Action, Observation};
use crate::config::WorldConfig;
use crate::error::WorldError;

/// Reward for an ordinary move.
pub const STEP_REWARD: i32 = -1;
/// Reward for bumping into an obstacle or the board edge.
pub const INVALID_MOVE_REWARD: i32 = -10;
/// Reward for a move that ends on the goal.
pub const GOAL_REWARD: i32 = 100;

/// Result of a single [`GridWorld::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: i32,
    /// The agent stands on the goal.
    pub terminated: bool,
    /// The step limit has been reached.
    pub truncated: bool,
}

/// Totals of a sequence of steps taken by [`GridWorld::follow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub steps: u32,
    pub total_reward: i32,
    pub terminated: bool,
    pub truncated: bool,
}

/// A square board with obstacles, a start, a goal and a moving agent.
pub struct GridWorld {
    config: WorldConfig,
    grid: Grid,
    start: Cell,
    goal: Cell,
    agent: Cell,
    steps: u32,
    terminated: bool,
    truncated: bool,
    rng: StdRng,
    finder: PathFinder,
}

impl GridWorld {
    /// Build a world and run the first [`reset`](Self::reset) with
    /// `config.seed`.
    pub fn new(config: WorldConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let grid = Grid::new(config.size, config.size)?;
        let goal = Cell::new(config.size - 1, config.size - 1);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut world = Self {
            grid,
            start: Cell::ZERO,
            goal,
            agent: Cell::ZERO,
            steps: 0,
            terminated: false,
            truncated: false,
            rng,
            finder: PathFinder::new(),
            config,
        };
        world.reset(None);
        Ok(world)
    }

    /// Start a new episode: clear the board, scatter obstacles and put the
    /// agent back on the start. A seed reseeds placement; `None` continues
    /// the current random stream.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        self.grid.fill(CellState::Passable);
        let size = self.config.size;
        for _ in 0..self.config.obstacles {
            let c = Cell::new(self.rng.random_range(0..size), self.rng.random_range(0..size));
            if c != self.start && c != self.goal {
                self.grid.set(c, CellState::Blocked);
            }
        }

        self.agent = self.start;
        self.steps = 0;
        self.terminated = false;
        self.truncated = false;
        log::debug!(
            "reset {}x{} board, {} cells blocked",
            size,
            size,
            self.grid.count(CellState::Blocked)
        );
        self.observation()
    }

    /// Move the agent one cell and score the move.
    ///
    /// A move off the board or into an obstacle leaves the agent in place.
    /// Stepping after the episode has ended is allowed; the step counter
    /// keeps running.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        if self.is_done() {
            log::warn!("step {action} after the episode ended");
        }
        self.steps += 1;

        let target = self.agent + action.delta();
        let mut reward = STEP_REWARD;
        if self.grid.is_passable(target) {
            self.agent = target;
        } else {
            reward = INVALID_MOVE_REWARD;
        }

        self.terminated = self.agent == self.goal;
        if self.terminated {
            reward = GOAL_REWARD;
            log::debug!("goal reached after {} steps", self.steps);
        }
        self.truncated = self.steps >= self.config.max_steps;

        StepOutcome {
            observation: self.observation(),
            reward,
            terminated: self.terminated,
            truncated: self.truncated,
        }
    }

    /// [`step`](Self::step) with a wire-encoded action.
    pub fn step_code(&mut self, code: u8) -> Result<StepOutcome, WorldError> {
        Ok(self.step(Action::try_from(code)?))
    }

    /// Apply `actions` in order, stopping early once the episode terminates
    /// or is truncated.
    pub fn follow(&mut self, actions: &[Action]) -> EpisodeSummary {
        let mut summary = EpisodeSummary::default();
        for &action in actions {
            let out = self.step(action);
            summary.steps += 1;
            summary.total_reward += out.reward;
            summary.terminated = out.terminated;
            summary.truncated = out.truncated;
            if out.terminated || out.truncated {
                break;
            }
        }
        summary
    }

    /// Shortest path from the agent to the goal on the current board.
    pub fn plan(&self) -> Result<Option<Path>, PathError> {
        self.finder.find_path(&self.grid, self.agent, self.goal)
    }

    /// [`plan`](Self::plan) as a list of moves.
    pub fn plan_actions(&self) -> Result<Option<Vec<Action>>, PathError> {
        Ok(self.plan()?.map(|path| {
            path.windows(2)
                .filter_map(|w| Action::between(w[0], w[1]))
                .collect()
        }))
    }

    /// Length of a shortest start-to-goal route on the current board.
    pub fn optimal_steps(&self) -> Result<Option<u32>, PathError> {
        shortest_steps(&self.grid, self.start, self.goal)
    }

    pub fn observation(&self) -> Observation {
        Observation {
            agent: self.agent,
            goal: self.goal,
        }
    }

    /// Whether the last step terminated or truncated the episode.
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn agent(&self) -> Cell {
        self.agent
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// The board as text: `.` open, `#` obstacle, `A` agent, `G` goal.
    pub fn render(&self) -> String {
        self.to_string()
    }

    #[cfg(test)]
    fn with_grid(config: WorldConfig, grid: Grid) -> Self {
        let mut world = Self::new(config).unwrap();
        world.goal = Cell::new(grid.rows() - 1, grid.cols() - 1);
        world.grid = grid;
        world
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.grid.cols() {
                let c = Cell::new(row, col);
                let ch = if c == self.agent {
                    'A'
                } else if c == self.goal {
                    'G'
                } else {
                    self.grid.at(c).map_or(' ', CellState::glyph)
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
