//! Command-line interface for preset-updater
//!
//! `preset-updater <preset_file> <diff_file> [output_file]`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use preset_updater::config::load_config;

mod update;

/// Merge `set` assignments from a diff dump into a preset configuration file
#[derive(Parser)]
#[command(name = "preset-updater")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    update: update::UpdateArgs,

    /// Config file (TOML or YAML). Defaults to preset-updater.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let Some(files) = cli.update.files() else {
        print_usage();
        return Ok(());
    };

    let cwd = std::env::current_dir().context("Failed to resolve the current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    update::run(files, &config)
}

fn print_usage() {
    println!("Usage: {} <preset_file> <diff_file> [output_file]", clap::crate_name!());
    println!();
    println!("Pass the preset file first, then the diff file.");
    println!("If [output_file] is not provided, it will default to");
    println!("'updated_[preset_file_name]' in the current directory.");
}
