//! Console output formatter for solve reports

use crate::output::report::SolveReport;
use colored::Colorize;
use quadratic_domain::OutputFormat;

/// Formats solve reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render all reports in the requested format
    pub fn render(reports: &[SolveReport], format: OutputFormat, precision: Option<usize>) -> String {
        match format {
            OutputFormat::Plain => reports
                .iter()
                .map(|r| Self::format_plain(r, precision))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Detailed => reports
                .iter()
                .map(|r| Self::format_detailed(r, precision))
                .collect::<Vec<_>>()
                .join("\n\n"),
            OutputFormat::Json => Self::format_json(reports),
        }
    }

    /// One line: the equation followed by its roots or `no result`
    pub fn format_plain(report: &SolveReport, precision: Option<usize>) -> String {
        match &report.roots {
            Some(roots) => format!(
                "{}: {}",
                report.equation.bold(),
                Self::join_roots(roots.as_slice(), precision).green()
            ),
            None => format!("{}: {}", report.equation.bold(), "no result".red()),
        }
    }

    /// Labelled block with coefficients, discriminant and roots
    pub fn format_detailed(report: &SolveReport, precision: Option<usize>) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Equation:    ".cyan().bold(),
            report.equation
        ));

        if let Some(coefficients) = &report.coefficients {
            output.push_str(&format!(
                "{} a = {}, b = {}, c = {}\n",
                "Coefficients:".cyan().bold(),
                coefficients.a(),
                coefficients.b(),
                coefficients.c()
            ));
        }

        if let Some(discriminant) = report.discriminant {
            output.push_str(&format!(
                "{} {}\n",
                "Discriminant:".cyan().bold(),
                discriminant
            ));
        }

        match (&report.roots, &report.error) {
            (Some(roots), _) => output.push_str(&format!(
                "{} {}",
                format!("Roots ({}):   ", roots.len()).cyan().bold(),
                Self::join_roots(roots.as_slice(), precision).green()
            )),
            (None, Some(error)) => {
                output.push_str(&format!("{} {}", "Error:       ".red().bold(), error))
            }
            (None, None) => output.push_str(&format!("{}", "no result".red())),
        }

        output
    }

    /// Format as JSON
    pub fn format_json(reports: &[SolveReport]) -> String {
        serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
    }

    /// Render a root, with fixed decimals if a precision is given
    pub fn format_root(root: f64, precision: Option<usize>) -> String {
        // -0.0 prints as "-0"
        let root = if root == 0.0 { 0.0 } else { root };
        match precision {
            Some(digits) => format!("{:.*}", digits, root),
            None => root.to_string(),
        }
    }

    fn join_roots(roots: &[f64], precision: Option<usize>) -> String {
        roots
            .iter()
            .map(|&r| Self::format_root(r, precision))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
