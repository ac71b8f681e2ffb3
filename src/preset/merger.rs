//! Rewriting preset `set` statements with values from a variable mapping.

use crate::diff::parser::{statement_name, STATEMENT_PREFIX};
use crate::domain::{MergeOutcome, VariableMapping};
use crate::error::UpdateError;
use crate::utils::{leading_token, read_text_file, split_lines};
use std::path::Path;

/// Rewrite a single preset line.
///
/// Returns `None` when the line must be kept as-is: it is not a
/// `set <name> = <value>` statement, its variable is not in the mapping, or its
/// value is empty. Otherwise the statement head is trimmed, the first value
/// token is replaced and everything after that token is kept verbatim.
pub fn merge_line(line: &str, mapping: &VariableMapping) -> Option<String> {
    if !line.trim().starts_with(STATEMENT_PREFIX) {
        return None;
    }

    let (command_part, remainder) = line.split_once('=')?;
    let new_value = mapping.get(statement_name(command_part))?;
    let (_old_value, rest_of_line) = leading_token(remainder.trim())?;

    Some(format!("{} = {}{}", command_part.trim(), new_value, rest_of_line))
}

/// Merge the mapping into preset text. Lines are rejoined with `\n`.
pub fn merge_preset(content: &str, mapping: &VariableMapping) -> MergeOutcome {
    let mut lines_updated = 0usize;
    let mut output_lines: Vec<String> = Vec::new();

    for (idx, line) in split_lines(content).into_iter().enumerate() {
        match merge_line(line, mapping) {
            Some(rewritten) => {
                tracing::debug!("line {}: {:?} -> {:?}", idx + 1, line, rewritten);
                lines_updated += 1;
                output_lines.push(rewritten);
            }
            None => output_lines.push(line.to_string()),
        }
    }

    MergeOutcome { content: output_lines.join("\n"), lines_updated }
}

/// Read `input`, merge the mapping into it and write the result to `output`.
///
/// The input is fully read before anything is written, so `output` may be the
/// same file. An existing output file is overwritten.
pub fn process_preset_file(
    input: &Path,
    output: &Path,
    mapping: &VariableMapping,
) -> Result<MergeOutcome, UpdateError> {
    let content = read_text_file(input)?;
    let outcome = merge_preset(&content, mapping);

    std::fs::write(output, &outcome.content).map_err(|e| UpdateError::from_write(output, e))?;
    tracing::info!("Wrote {} ({} lines updated)", output.display(), outcome.lines_updated);

    Ok(outcome)
}
