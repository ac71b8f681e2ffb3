//! Text file reading with UTF-8 decoding.
//!
//! Both the diff and the preset file are read the same way:
//! - a leading UTF-8 BOM is dropped
//! - invalid byte sequences are decoded as U+FFFD instead of failing the run
//! - a missing file is reported separately from other I/O failures

use crate::error::UpdateError;
use encoding_rs::UTF_8;
use std::path::Path;

/// Read a whole file as UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String, UpdateError> {
    let bytes = std::fs::read(path).map_err(|e| UpdateError::from_read(path, e))?;
    Ok(decode_utf8(&bytes, path))
}

fn decode_utf8(bytes: &[u8], path: &Path) -> String {
    let (decoded, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::warn!(
            "{} is not valid UTF-8; invalid sequences were replaced with U+FFFD",
            path.display()
        );
    }
    decoded.into_owned()
}
