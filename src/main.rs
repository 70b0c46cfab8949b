//! tictac - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use tictac::PlayConfig;
use tictac_engine::GameEngine;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    initialize_tracing(&config);

    match cli.command.unwrap_or(Command::Play { no_hints: false }) {
        Command::Play { no_hints } => run_play(config, no_hints),
        Command::Replay { moves, json } => run_replay(&moves, json, &config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig, no_hints: bool) -> Result<()> {
    let config = if no_hints { config.with_hints(false) } else { config };
    let mut engine = GameEngine::new();

    info!("Starting interactive game");
    println!("{}", tictac::HELP);

    let stdin = std::io::stdin();
    let stats = tictac::run(&mut engine, stdin.lock(), std::io::stdout(), &config)
        .context("Terminal I/O failed")?;

    info!(?stats, "Session ended");
    Ok(())
}

/// Replay a move list and print every result
#[instrument(skip(config))]
fn run_replay(moves: &[(usize, usize)], json: bool, config: &PlayConfig) -> Result<()> {
    let report = tictac::replay(moves)?;
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for step in &report.steps {
        writeln!(out, "{}", tictac::describe((step.row, step.col), &step.result))?;
    }
    let win = report.steps.iter().find_map(|step| step.result.win());
    writeln!(out)?;
    writeln!(out, "{}", tictac::render_board(report.engine.board(), win, config))?;
    let last = report.steps.iter().rev().find(|step| step.result.is_accepted());
    writeln!(out, "{}", tictac::status_line(&report.engine, last.map(|step| &step.result)))?;
    Ok(())
}

fn initialize_tracing(config: &PlayConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
