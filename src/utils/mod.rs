//! Utility functions

pub mod encoding;
pub mod lines;
pub mod paths;

pub use encoding::read_text_file;
pub use lines::{leading_token, split_lines};
pub use paths::{default_output_path, display_name};
