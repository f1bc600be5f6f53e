//! Solve Equation use case
//!
//! Orchestrates parse → discriminant → classification → root formulas.
//!
//! Two entry points share one pipeline:
//!
//! - [`solve`] collapses every failure into `None`, so malformed input and
//!   equations without real roots look the same to the caller.
//! - [`SolveEquationUseCase::execute`] keeps the specific reason.

use quadratic_domain::{
    Coefficients, ParseError, RootCount, RootSet, count_roots, discriminant, first_root,
    second_root, try_parse_equation, util::serialize_wide_int,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while solving an equation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveEquationError {
    #[error("Invalid equation: {0}")]
    InvalidEquation(#[from] ParseError),

    #[error("No real roots for {coefficients} (discriminant {discriminant})")]
    NoRealRoots {
        coefficients: Coefficients,
        discriminant: i128,
    },
}

/// Input for the SolveEquation use case
#[derive(Debug, Clone)]
pub struct SolveEquationInput {
    /// Raw equation text, not yet validated
    pub equation: String,
}

impl SolveEquationInput {
    pub fn new(equation: impl Into<String>) -> Self {
        Self {
            equation: equation.into(),
        }
    }
}

/// A successfully solved equation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveEquationOutput {
    pub equation: String,
    pub coefficients: Coefficients,
    #[serde(serialize_with = "serialize_wide_int")]
    pub discriminant: i128,
    pub root_count: RootCount,
    pub roots: RootSet,
}

/// Use case for solving one quadratic equation
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveEquationUseCase;

impl SolveEquationUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case
    pub fn execute(
        &self,
        input: SolveEquationInput,
    ) -> Result<SolveEquationOutput, SolveEquationError> {
        let coefficients = try_parse_equation(&input.equation).inspect_err(|e| {
            debug!("Rejected equation {:?}: {}", input.equation, e);
        })?;

        let discriminant = discriminant(&coefficients);
        let root_count = count_roots(discriminant);
        debug!(
            "Parsed {} with discriminant {} ({} roots)",
            coefficients, discriminant, root_count
        );

        let roots = match root_count {
            RootCount::Two => RootSet::pair(
                first_root(&coefficients, discriminant),
                second_root(&coefficients, discriminant),
            ),
            RootCount::One => RootSet::single(first_root(&coefficients, discriminant)),
            RootCount::None => {
                info!("No real roots for {}", coefficients);
                return Err(SolveEquationError::NoRealRoots {
                    coefficients,
                    discriminant,
                });
            }
        };

        Ok(SolveEquationOutput {
            equation: input.equation,
            coefficients,
            discriminant,
            root_count,
            roots,
        })
    }
}

/// Solve an equation, returning None for malformed input or no real roots.
///
/// ```
/// use quadratic_application::solve;
///
/// assert_eq!(solve("2x^2+4x+2=0").unwrap().as_slice(), &[-1.0]);
/// assert_eq!(solve("2x^2+5x+2=0").unwrap().len(), 2);
/// assert!(solve("1x^2+2x+3=0").is_none());
/// assert!(solve("4x+1=0").is_none());
/// ```
pub fn solve(text: &str) -> Option<RootSet> {
    SolveEquationUseCase::new()
        .execute(SolveEquationInput::new(text))
        .ok()
        .map(|output| output.roots)
}
