//! Line splitting and token helpers shared by the parser and merger.

use once_cell::sync::Lazy;
use regex::Regex;

/// `\n` with an optional preceding `\r`. A lone `\r` is not a line break.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// First run of non-whitespace characters at the start of a string.
static LEADING_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+").unwrap());

/// Split text into lines on LF or CRLF.
///
/// A trailing line break yields a trailing empty line, so joining the result
/// with `\n` restores the text with every CRLF normalized to LF.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

/// Split off the whitespace-free token at the start of `text`.
///
/// Returns `(token, rest)` where `rest` is everything after the token,
/// including its leading whitespace. `None` when `text` is empty or starts
/// with whitespace.
pub fn leading_token(text: &str) -> Option<(&str, &str)> {
    LEADING_TOKEN.find(text).map(|m| (m.as_str(), &text[m.end()..]))
}
