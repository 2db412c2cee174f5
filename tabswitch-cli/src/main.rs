//! # tabswitch
//!
//! Command-line front end for tab pages described by a layout document.
//!
//! ## Usage
//!
//! ```bash
//! # Render static HTML wired to the wasm module
//! tabswitch render tabs.toml -o page.html --wasm-module ./pkg/tabswitch_wasm.js
//!
//! # Replay clicks against an in-memory page
//! tabswitch simulate tabs.toml --click tab-a --click tab-b
//!
//! # Lint targets and initial markers
//! tabswitch check tabs.json --json
//! ```

mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tabswitch_core::SelectorConfig;
use tracing::debug;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "tabswitch")]
#[command(about = "Render, simulate and check data-tab pages")]
#[command(version)]
struct Args {
    /// Selector config (TOML). Defaults to ./tabswitch.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a layout to a standalone HTML page
    Render {
        /// Layout document (.json or .toml)
        layout: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path or URL of the tabswitch-wasm JS glue module
        #[arg(long)]
        wasm_module: Option<String>,
    },

    /// Click triggers in order and print the resulting markers
    Simulate {
        /// Layout document (.json or .toml)
        layout: PathBuf,

        /// Trigger id to click (repeatable)
        #[arg(long = "click", value_name = "TRIGGER_ID", required = true)]
        clicks: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report dangling targets, duplicates and inconsistent initial state
    Check {
        /// Layout document (.json or .toml)
        layout: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<SelectorConfig> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            SelectorConfig::load_from_path(path)?
        }
        None => SelectorConfig::load(Path::new("."))?,
    };
    debug!(?config, "selector config");
    Ok(config)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref()).context("failed to load config")?;

    match args.command {
        Command::Render {
            layout,
            output,
            wasm_module,
        } => commands::render(&layout, &config, output.as_deref(), wasm_module),
        Command::Simulate {
            layout,
            clicks,
            json,
        } => commands::simulate(&layout, &config, &clicks, json),
        Command::Check { layout, json } => commands::check(&layout, json),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries rendered HTML and reports.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[tabswitch] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
