//! Update pipeline: parse the diff, merge it into the preset, write the result.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use preset_updater::diff::parse_diff_file;
use preset_updater::domain::Config;
use preset_updater::preset::process_preset_file;
use preset_updater::utils::{default_output_path, display_name};

#[derive(Args)]
pub struct UpdateArgs {
    /// Preset file to update
    #[arg(value_name = "PRESET_FILE")]
    pub preset_file: Option<PathBuf>,

    /// Diff file containing the `set` values to apply
    #[arg(value_name = "DIFF_FILE")]
    pub diff_file: Option<PathBuf>,

    /// Output path [default: updated_<preset file name>]
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,
}

/// Input and output paths once both required arguments are present.
pub struct UpdateFiles {
    pub preset: PathBuf,
    pub diff: PathBuf,
    pub output: Option<PathBuf>,
}

impl UpdateArgs {
    /// `None` when the preset or diff path is missing.
    pub fn files(self) -> Option<UpdateFiles> {
        Some(UpdateFiles {
            preset: self.preset_file?,
            diff: self.diff_file?,
            output: self.output_file,
        })
    }
}

pub fn run(files: UpdateFiles, config: &Config) -> Result<()> {
    let UpdateFiles { preset, diff, output } = files;
    let output = output.unwrap_or_else(|| default_output_path(&preset, &config.output_prefix));

    println!("Preset file: {}", preset.display());
    println!("Diff file:   {}", diff.display());
    println!("Output file: {}\n", output.display());

    println!("Reading values from '{}'...", display_name(&diff));
    let mapping = parse_diff_file(&diff)
        .context("Script failed due to errors reading the input files.")?;
    println!("Found {} 'set' commands to use for updating.", mapping.len());

    if mapping.is_empty() {
        tracing::warn!(
            "{} contains no `set` assignments; output will match the preset",
            diff.display()
        );
    }

    println!(
        "\nProcessing '{}' and writing to '{}'...",
        display_name(&preset),
        display_name(&output)
    );
    let outcome = process_preset_file(&preset, &output, &mapping)
        .with_context(|| format!("Failed to update preset file {}", preset.display()))?;
    println!("Processing complete. Updated {} lines.", outcome.lines_updated);

    println!("\nSuccess! The updated configuration has been saved to '{}'", output.display());
    Ok(())
}
