//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for solve results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Roots only, one line per equation
    Plain,
    /// Coefficients, discriminant, root count and roots
    Detailed,
    /// JSON array of reports
    Json,
}

impl From<OutputFormat> for quadratic_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Detailed => Self::Detailed,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for quadratic-solver
#[derive(Parser, Debug)]
#[command(name = "quadratic-solver")]
#[command(version, about = "Find the real roots of quadratic equations")]
#[command(long_about = r#"
Find the real roots of quadratic equations written as <A>x^2<B>x<C>=0.

A is an integer with an optional '-'. B and C are integers with a
mandatory '+' or '-'. No spaces are allowed and the right-hand side must be 0.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quadratic.toml    Project-level config
3. ~/.config/quadratic-solver/config.toml   Global config

Example:
  quadratic-solver "2x^2+5x+2=0"
  quadratic-solver -o detailed "1x^2-3x+2=0" "1x^2+2x+3=0"
  quadratic-solver -o json --precision 3 -- "-1x^2+0x+4=0"
"#)]
pub struct Cli {
    /// Equations to solve
    #[arg(value_name = "EQUATION", required_unless_present = "show_config")]
    pub equations: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Digits after the decimal point (overrides the config file)
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_equations_and_flags() {
        let cli = Cli::try_parse_from([
            "quadratic-solver",
            "-o",
            "json",
            "-p",
            "2",
            "-vv",
            "2x^2+5x+2=0",
            "1x^2+2x+3=0",
        ])
        .unwrap();

        assert_eq!(cli.equations, vec!["2x^2+5x+2=0", "1x^2+2x+3=0"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.precision, Some(2));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_negative_leading_equation_after_separator() {
        let cli = Cli::try_parse_from(["quadratic-solver", "--", "-3x^2+4x+1=0"]).unwrap();
        assert_eq!(cli.equations, vec!["-3x^2+4x+1=0"]);
    }

    #[test]
    fn test_equation_required_without_show_config() {
        assert!(Cli::try_parse_from(["quadratic-solver"]).is_err());

        let cli = Cli::try_parse_from(["quadratic-solver", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.equations.is_empty());
    }

    #[test]
    fn test_output_format_into_domain() {
        let format: quadratic_domain::OutputFormat = OutputFormat::Detailed.into();
        assert_eq!(format, quadratic_domain::OutputFormat::Detailed);
    }
}
