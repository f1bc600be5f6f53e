//! Per-equation report shared by all output formats

use quadratic_application::{SolveEquationError, SolveEquationOutput};
use quadratic_domain::{Coefficients, RootCount, RootSet, util::serialize_wide_int_opt};
use serde::Serialize;

/// Flattened outcome of solving one equation
///
/// `roots` is `None` exactly when solving produced no result, whether the
/// text was malformed or the equation has no real roots. `error` carries
/// the reason in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub equation: String,
    pub coefficients: Option<Coefficients>,
    #[serde(serialize_with = "serialize_wide_int_opt")]
    pub discriminant: Option<i128>,
    pub root_count: Option<RootCount>,
    pub roots: Option<RootSet>,
    pub error: Option<String>,
}

impl SolveReport {
    pub fn from_outcome(
        equation: impl Into<String>,
        outcome: Result<SolveEquationOutput, SolveEquationError>,
    ) -> Self {
        let equation = equation.into();
        match outcome {
            Ok(output) => Self {
                equation,
                coefficients: Some(output.coefficients),
                discriminant: Some(output.discriminant),
                root_count: Some(output.root_count),
                roots: Some(output.roots),
                error: None,
            },
            Err(SolveEquationError::NoRealRoots {
                coefficients,
                discriminant,
            }) => Self {
                equation,
                coefficients: Some(coefficients),
                discriminant: Some(discriminant),
                root_count: Some(RootCount::None),
                roots: None,
                error: Some("no real roots".to_string()),
            },
            Err(err @ SolveEquationError::InvalidEquation(_)) => Self {
                equation,
                coefficients: None,
                discriminant: None,
                root_count: None,
                roots: None,
                error: Some(err.to_string()),
            },
        }
    }

    /// Whether solving produced roots
    pub fn is_solved(&self) -> bool {
        self.roots.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadratic_application::{SolveEquationInput, SolveEquationUseCase};

    fn report(equation: &str) -> SolveReport {
        let outcome = SolveEquationUseCase::new().execute(SolveEquationInput::new(equation));
        SolveReport::from_outcome(equation, outcome)
    }

    #[test]
    fn test_solved_report() {
        let report = report("2x^2+5x+2=0");
        assert!(report.is_solved());
        assert_eq!(report.discriminant, Some(9));
        assert_eq!(report.root_count, Some(RootCount::Two));
        assert_eq!(report.roots, Some(RootSet::pair(-0.5, -2.0)));
        assert_eq!(report.error, None);
    }

    #[test]
    fn test_no_real_roots_report_keeps_details() {
        let report = report("1x^2+2x+3=0");
        assert!(!report.is_solved());
        assert_eq!(report.coefficients, Coefficients::new(1, 2, 3));
        assert_eq!(report.discriminant, Some(-8));
        assert_eq!(report.root_count, Some(RootCount::None));
        assert_eq!(report.error.as_deref(), Some("no real roots"));
    }

    #[test]
    fn test_invalid_report() {
        let report = report("4x+1=0");
        assert!(!report.is_solved());
        assert_eq!(report.coefficients, None);
        assert_eq!(report.discriminant, None);
        assert!(report.error.unwrap().starts_with("Invalid equation"));
    }

    #[test]
    fn test_report_json_shape() {
        let json = serde_json::to_value(report("2x^2+4x+2=0")).unwrap();
        assert_eq!(json["equation"], "2x^2+4x+2=0");
        assert_eq!(json["discriminant"], 0);
        assert_eq!(json["root_count"], "one");
        assert_eq!(json["roots"], serde_json::json!([-1.0]));
        assert!(json["error"].is_null());
    }
}
