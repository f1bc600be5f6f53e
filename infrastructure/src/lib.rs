//! Infrastructure layer for quadratic-solver
//!
//! This crate contains configuration file loading and merging.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
};
