//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for solve results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Roots only, one line per equation (default)
    #[default]
    Plain,
    /// Coefficients, discriminant, root count and roots
    Detailed,
    /// JSON output
    Json,
}
