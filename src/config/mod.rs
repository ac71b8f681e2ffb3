//! Configuration loading
//!
//! An optional `preset-updater.toml` (or `.yml`) in the working directory, or a
//! file passed with `--config`, supplies defaults. CLI arguments take
//! precedence over anything loaded here.

pub mod loader;

pub use loader::load_config;
