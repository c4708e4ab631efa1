//! Rangectl CLI: headless range controls.
//!
//! Commands:
//! - `replay`: mount a control, apply a scenario's pointer and attribute
//!   steps, print change notifications as JSON lines and a render summary
//! - `display`: print the display text for a normalized value

mod scenario;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use rangectl_core::DisplayRange;

use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "rangectl", about = "Rangectl CLI: headless range controls")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a TOML scenario against a headless control.
    Replay {
        /// Path to the scenario file.
        scenario: PathBuf,

        /// Pretty-print the final render summary.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the display text for a normalized value.
    Display {
        /// Normalized value (not clamped).
        #[arg(allow_negative_numbers = true)]
        normalized: f64,

        /// Display value at normalized 0.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,

        /// Display value at normalized 1.
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        max: f64,

        /// Unit suffix.
        #[arg(long, default_value = "")]
        unit: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { scenario, pretty } => cmd_replay(&scenario, pretty),
        Commands::Display {
            normalized,
            min,
            max,
            unit,
        } => cmd_display(normalized, min, max, &unit),
    }
}

fn cmd_replay(path: &Path, pretty: bool) -> Result<()> {
    let replay = Scenario::from_file(path)?.replay()?;
    for event in &replay.events {
        println!("{}", serde_json::to_string(event)?);
    }
    let summary = if pretty {
        serde_json::to_string_pretty(&replay.summary)?
    } else {
        serde_json::to_string(&replay.summary)?
    };
    println!("{summary}");
    Ok(())
}

fn cmd_display(normalized: f64, min: f64, max: f64, unit: &str) -> Result<()> {
    if !normalized.is_finite() {
        bail!("normalized value must be finite, got {normalized}");
    }
    println!("{}", DisplayRange::new(min, max).format(normalized, unit));
    Ok(())
}
