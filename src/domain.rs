//! Core data types shared by the diff parser, preset merger and CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prefix written in front of the preset file name when no output path is given.
pub const DEFAULT_OUTPUT_PREFIX: &str = "updated_";

/// A single `set <name> = <value>` statement read from a diff file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Replacement values keyed by variable name.
///
/// Built once from the diff file and read-only afterwards. When the same name
/// is assigned more than once, the last assignment wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMapping {
    values: HashMap<String, String>,
}

impl VariableMapping {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Assignment> for VariableMapping {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        let mut values = HashMap::new();
        for assignment in iter {
            values.insert(assignment.name, assignment.value);
        }
        Self { values }
    }
}

/// Result of merging a mapping into preset text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub content: String,
    pub lines_updated: usize,
}

/// Settings read from an optional `preset-updater.toml` / `.yml` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prepended to the preset file's name to form the default output name.
    pub output_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { output_prefix: DEFAULT_OUTPUT_PREFIX.to_string() }
    }
}
