//! Output path derivation

use std::path::{Path, PathBuf};

/// Default output path: `prefix` + the preset's file name, relative to the
/// current working directory.
pub fn default_output_path(preset: &Path, prefix: &str) -> PathBuf {
    let file_name = preset.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    PathBuf::from(format!("{prefix}{file_name}"))
}

/// File name component for console messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
