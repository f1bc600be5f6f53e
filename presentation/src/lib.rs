//! Presentation layer for quadratic-solver
//!
//! This crate contains the CLI definition and the output formatters
//! for solve results.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::report::SolveReport;
