//! CLI entrypoint for quadratic-solver
//!
//! This is the main binary that wires together all layers: configuration,
//! logging, the solve use case and the console formatter.

use anyhow::{Result, anyhow};
use clap::Parser;
use quadratic_application::{SolveEquationInput, SolveEquationUseCase};
use quadratic_domain::OutputFormat;
use quadratic_infrastructure::ConfigLoader;
use quadratic_presentation::{Cli, ConsoleFormatter, SolveReport};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags override file values
    if let Some(precision) = cli.precision {
        config.output.precision = Some(precision);
    }
    config.validate()?;

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Solving {} equation(s)", cli.equations.len());

    let use_case = SolveEquationUseCase::new();
    let reports: Vec<SolveReport> = cli
        .equations
        .iter()
        .map(|equation| {
            let outcome = use_case.execute(SolveEquationInput::new(equation.as_str()));
            SolveReport::from_outcome(equation.as_str(), outcome)
        })
        .collect();

    println!(
        "{}",
        ConsoleFormatter::render(&reports, format, config.output.precision)
    );

    let unsolved = reports.iter().filter(|r| !r.is_solved()).count();
    debug!("{} of {} equation(s) without result", unsolved, reports.len());

    Ok(if unsolved == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
