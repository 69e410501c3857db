//! `gridpath`: reset a grid world, plan with A*, walk the plan.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use gridpath_core::CellState;
use gridpath_paths::Path;
use gridpath_world::{EpisodeSummary, GridWorld};

use crate::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.world_config()?;
    log::info!("world config: {config:?}");

    let mut world = GridWorld::new(config).context("failed to create world")?;

    for episode in 1..=cli.episodes {
        if episode > 1 {
            world.reset(None);
        }
        run_episode(&mut world, episode, cli.quiet)?;
    }
    Ok(())
}

fn run_episode(world: &mut GridWorld, episode: u32, quiet: bool) -> Result<()> {
    let blocked = world.grid().count(CellState::Blocked);
    if !quiet {
        println!("=== episode {episode} ({blocked} obstacles) ===");
        println!("{world}\n");
    }

    let Some(path) = world.plan()? else {
        println!("episode {episode}: no path from {} to {}", world.start(), world.goal());
        return Ok(());
    };
    if !quiet {
        print_plan(&path);
    }

    let actions = world.plan_actions()?.unwrap_or_default();
    let summary = world.follow(&actions);
    if !quiet {
        println!("{world}\n");
    }
    print_summary(episode, &path, &summary);
    Ok(())
}

fn print_plan(path: &Path) {
    println!("plan ({} steps): {path}\n", path.steps());
}

fn print_summary(episode: u32, path: &Path, summary: &EpisodeSummary) {
    let outcome = if summary.terminated {
        "reached goal"
    } else if summary.truncated {
        "truncated"
    } else {
        "stopped"
    };
    println!(
        "episode {episode}: {outcome} in {} steps (optimal {}), reward {}",
        summary.steps,
        path.steps(),
        summary.total_reward
    );
}
