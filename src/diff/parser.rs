//! Extraction of `set <name> = <value>` assignments from a diff dump.

use crate::domain::{Assignment, VariableMapping};
use crate::error::UpdateError;
use crate::utils::{leading_token, read_text_file, split_lines};
use std::path::Path;

/// Keyword (with its mandatory trailing space) that opens an assignment.
pub const STATEMENT_PREFIX: &str = "set ";

/// Variable name from the part of a statement before `=`.
///
/// Leading whitespace is allowed so the merger can pass the untrimmed head of
/// a preset line.
pub(crate) fn statement_name(head: &str) -> &str {
    let head = head.trim_start();
    head.strip_prefix(STATEMENT_PREFIX).unwrap_or(head).trim()
}

/// Parse one diff line into an assignment.
///
/// Returns `None` for anything that is not `set <name> = <value>`, including
/// statements whose value is empty.
pub fn parse_assignment(line: &str) -> Option<Assignment> {
    let line = line.trim();
    if !line.starts_with(STATEMENT_PREFIX) {
        return None;
    }

    let (head, rest) = line.split_once('=')?;
    let (value, _trailing) = leading_token(rest.trim())?;

    Some(Assignment::new(statement_name(head), value))
}

/// Build the variable mapping from diff text. Later assignments override
/// earlier ones.
pub fn parse_diff(content: &str) -> VariableMapping {
    split_lines(content)
        .into_iter()
        .filter_map(parse_assignment)
        .inspect(|a| tracing::debug!("diff assignment: {} = {}", a.name, a.value))
        .collect()
}

/// Read and parse a diff file.
pub fn parse_diff_file(path: &Path) -> Result<VariableMapping, UpdateError> {
    let content = read_text_file(path)?;
    let mapping = parse_diff(&content);
    tracing::info!("Parsed {} assignments from {}", mapping.len(), path.display());
    Ok(mapping)
}
