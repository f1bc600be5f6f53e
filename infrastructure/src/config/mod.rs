//! Configuration file loading for quadratic-solver
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quadratic.toml` or `./.quadratic.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quadratic-solver/config.toml`
//! 4. Fallback: `~/.config/quadratic-solver/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat};
pub use loader::ConfigLoader;
