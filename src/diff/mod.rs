//! Diff file parsing

pub mod parser;

pub use parser::{parse_assignment, parse_diff, parse_diff_file, STATEMENT_PREFIX};
