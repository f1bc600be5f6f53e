//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quadratic_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use quadratic_domain::OutputFormat as FileOutputFormat;

/// Most significant digits an f64 can carry
pub const MAX_PRECISION: usize = 17;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("precision {0} exceeds the maximum of {MAX_PRECISION}")]
    PrecisionTooLarge(usize),
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Digits after the decimal point; shortest exact form when unset
    pub precision: Option<usize>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            precision: None,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(precision) = self.output.precision
            && precision > MAX_PRECISION
        {
            return Err(ConfigValidationError::PrecisionTooLarge(precision));
        }

        Ok(())
    }
}
