//! preset-updater: apply a diff dump's `set` values to a preset file
//!
//! Reads every `set <name> = <value>` line from the diff file and rewrites the
//! matching statements of the preset file, leaving everything else untouched.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
