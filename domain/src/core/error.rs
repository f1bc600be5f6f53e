//! Domain error types

use thiserror::Error;

/// Reasons an equation text is rejected by the parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Equation is empty")]
    Empty,

    #[error("Equation does not match <A>x^2<B>x<C>=0: {0}")]
    Malformed(String),

    #[error("Coefficient out of range: {0}")]
    CoefficientOutOfRange(String),

    #[error("Coefficient a is zero, equation is not quadratic")]
    NotQuadratic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_quadratic_display() {
        let error = ParseError::NotQuadratic;
        assert_eq!(
            error.to_string(),
            "Coefficient a is zero, equation is not quadratic"
        );
    }

    #[test]
    fn test_malformed_display_includes_input() {
        let error = ParseError::Malformed("4x+1=0".to_string());
        assert!(error.to_string().ends_with("4x+1=0"));
    }

    #[test]
    fn test_out_of_range_display() {
        let error = ParseError::CoefficientOutOfRange("+99999999999".to_string());
        assert_eq!(error.to_string(), "Coefficient out of range: +99999999999");
    }
}
