/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Drive Pacman from the command line.
//!
//! Report and diagnostic lines go to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pacman_world::{run_script, Agent, Console, Facing, StdoutConsole};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "============================";

#[derive(Debug, Parser)]
#[command(name = "pacman-sim", about = "Move Pacman around a 5x5 grid")]
struct Cli {
    /// Log filter used when RUST_LOG is not set, e.g. `debug` or `pacman_world=debug`.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Run the three sample sessions, each with a fresh Pacman (the default).
    Demo,

    /// Run a command script against one Pacman.
    Run {
        /// Script to read. Reads stdin when absent.
        file: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Sessions share the console but not the agent.
fn run_demo<C: Console>(console: &mut C) {
    Agent::with_console(&mut *console)
        .place(0, 0, Facing::North)
        .move_forward()
        .report();

    console.write_line(SEPARATOR);

    Agent::with_console(&mut *console)
        .place(0, 0, Facing::North)
        .turn_left()
        .report();

    console.write_line(SEPARATOR);

    Agent::with_console(&mut *console)
        .place(1, 2, Facing::East)
        .move_forward()
        .move_forward()
        .turn_left()
        .move_forward()
        .report();
}

fn run_file(file: Option<PathBuf>) -> Result<()> {
    let mut agent = Agent::new();
    let summary = match file {
        Some(path) => {
            let f = File::open(&path)
                .with_context(|| format!("open script: {}", path.display()))?;
            run_script(BufReader::new(f), &mut agent)
                .with_context(|| format!("read script: {}", path.display()))?
        }
        None => run_script(std::io::stdin().lock(), &mut agent).context("read script: stdin")?,
    };
    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        "script finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => {
            run_demo(&mut StdoutConsole);
            Ok(())
        }
        Mode::Run { file } => run_file(file),
    }
}
