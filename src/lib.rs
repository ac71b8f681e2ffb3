//! preset-updater: merge `set` assignments from a diff dump into a preset file.
//!
//! The pipeline is two steps:
//! 1. [`diff::parse_diff_file`] builds a [`domain::VariableMapping`] from the diff
//! 2. [`preset::process_preset_file`] rewrites matching preset lines and writes
//!    the result
//!
//! Lines that are not `set <name> = <value>` statements, or whose variable is
//! not in the mapping, are copied through unchanged.

pub mod config;
pub mod diff;
pub mod domain;
pub mod error;
pub mod preset;
pub mod utils;

pub use domain::{Assignment, Config, MergeOutcome, VariableMapping};
pub use error::UpdateError;
