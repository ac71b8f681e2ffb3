//! Preset file merging

pub mod merger;

pub use merger::{merge_line, merge_preset, process_preset_file};
