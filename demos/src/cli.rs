//! Command-line flags and config-file loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gridpath_world::WorldConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plan and walk shortest paths in a random grid world", long_about = None)]
pub struct Cli {
    /// TOML file with `size`, `max_steps`, `obstacles` and `seed` keys.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Side length of the board.
    #[arg(long)]
    pub size: Option<i32>,

    /// Random obstacle draws per episode.
    #[arg(long)]
    pub obstacles: Option<usize>,

    /// Steps before an episode is truncated.
    #[arg(long)]
    pub max_steps: Option<u32>,

    /// Seed for obstacle placement.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 1)]
    pub episodes: u32,

    /// Only print the per-episode summary line.
    #[arg(long, short, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// File config (or defaults), with any flags given on the command line
    /// taking precedence.
    pub fn world_config(&self) -> Result<WorldConfig> {
        let mut config = match &self.config {
            Some(path) => load(path)?,
            None => WorldConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(obstacles) = self.obstacles {
            config.obstacles = obstacles;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn load(path: &Path) -> Result<WorldConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
