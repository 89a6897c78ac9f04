//! # liquid-showcase
//!
//! Renders the liquid transitions showcase page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Write ./index.html (or the `output` from liquid-showcase.toml)
//! liquid-showcase
//!
//! # Explicit target, one card's code expanded
//! liquid-showcase render -o site/index.html --open gooey-swipe
//!
//! # Inspect the catalog
//! liquid-showcase list --json
//! liquid-showcase snippet ink-ripple
//! ```

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use config::{RenderOverrides, ShowcaseConfig};

#[derive(Parser, Debug)]
#[command(name = "liquid-showcase")]
#[command(about = "Render the liquid transitions showcase page as static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Config file (default: ./liquid-showcase.toml when present); read by
    /// `render`, validated for every subcommand
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page (default when no subcommand is given)
    Render(RenderArgs),
    /// List catalog entries
    List {
        /// Emit JSON instead of `id<TAB>name` lines
        #[arg(long)]
        json: bool,
    },
    /// Print one entry's code snippet verbatim
    Snippet {
        /// Entry id, e.g. `liquid-button`
        id: String,
    },
}

#[derive(clap::Args, Debug, Default)]
struct RenderArgs {
    /// Output file (default: index.html)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the page to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Start this entry's code disclosure expanded (repeatable)
    #[arg(long = "open", value_name = "ID")]
    open: Vec<String>,

    /// Skip the prefers-reduced-motion guard stylesheet
    #[arg(long)]
    no_reduced_motion: bool,
}

impl From<RenderArgs> for RenderOverrides {
    fn from(args: RenderArgs) -> Self {
        RenderOverrides {
            output: args.output,
            stdout: args.stdout,
            title: args.title,
            open: args.open,
            no_reduced_motion: args.no_reduced_motion,
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries HTML and listings
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("liquid-showcase v{}", env!("CARGO_PKG_VERSION"));

    // Every subcommand fails on a missing or malformed config, not only render
    let config = ShowcaseConfig::load(args.config.as_deref())?;

    match args.command.unwrap_or(Command::Render(RenderArgs::default())) {
        Command::Render(render_args) => commands::render(&config, &render_args.into()),
        Command::List { json } => commands::list(json),
        Command::Snippet { id } => commands::snippet(&id),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[liquid-showcase] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
