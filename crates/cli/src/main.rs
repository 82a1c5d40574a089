use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tilepath::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod levelfile;

#[derive(Parser)]
#[command(name = "tilepath-cli")]
#[command(about = "Level solvability checks and diagnostics")]
struct Cmd {
    /// Log verbosity: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check a level definition and print every attempted path
    Check {
        #[arg(long)]
        input: String,
        /// Cap on recorded attempts
        #[arg(long, default_value_t = 1024)]
        max_attempts: usize,
    },
    /// Scramble committed rotations deterministically, then check
    Scramble {
        #[arg(long)]
        input: String,
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let max_level = cmd.log.parse().unwrap_or(tracing::Level::INFO);
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(max_level)
        .init();
    match cmd.action {
        Action::Check { input, max_attempts } => check(&input, max_attempts),
        Action::Scramble { input, seed, index } => scramble(&input, seed, index),
    }
}

fn check(input: &str, max_attempts: usize) -> Result<()> {
    let level = levelfile::load_level(Path::new(input))?;
    let report = check_level(&level, SearchCfg { max_attempts });
    print_report(&level, &report);
    Ok(())
}

fn scramble(input: &str, seed: u64, index: u64) -> Result<()> {
    let mut level = levelfile::load_level(Path::new(input))?;
    scramble_rotations(&mut level, ReplayToken { seed, index });
    tracing::info!(seed, index, "rotations scrambled");
    let report = check_level_with_defaults(&level);
    print_report(&level, &report);
    Ok(())
}

fn print_report(level: &Level, report: &SolveReport) {
    tracing::info!(
        solvable = report.solvable,
        attempts = report.attempts.len(),
        dropped = report.dropped_attempts,
        "check finished"
    );
    println!("paths tried:");
    for attempt in &report.attempts {
        let mut parts = vec![attempt.start.clone()];
        parts.extend(attempt.steps.iter().cloned());
        println!("  {}", parts.join(" -> "));
    }
    for (tile, rot) in level.tiles().iter().zip(&report.rotations) {
        println!("{}: {}°", tile.name(), rot.degrees());
    }
    println!("solvable: {}", report.solvable);
}
