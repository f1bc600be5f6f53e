//! Equation text parsing.
//!
//! Only one canonical form is accepted:
//!
//! ```text
//! ["-"]digits "x^2" ("+"|"-")digits "x" ("+"|"-")digits "=0"
//! ```
//!
//! No whitespace, no missing terms, no reordering, and the right-hand side
//! is exactly `0`. Digits are ASCII only.
//!
//! | Function | Returns | On rejection |
//! |----------|---------|--------------|
//! | [`parse_equation`] | `Option<Coefficients>` | `None` |
//! | [`try_parse_equation`] | `Result<Coefficients, ParseError>` | the reason |

use super::coefficients::Coefficients;
use crate::core::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static EQUATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+)x\^2([+-][0-9]+)x([+-][0-9]+)=0$")
        .expect("equation grammar is a valid regex")
});

/// Parse an equation, returning None for any rejected input.
///
/// # Examples
///
/// ```
/// use quadratic_domain::parse_equation;
///
/// let coeffs = parse_equation("-3x^2+4x+1=0").unwrap();
/// assert_eq!(coeffs.as_array(), [-3, 4, 1]);
///
/// assert!(parse_equation("0x^2+4x+1=0").is_none());
/// assert!(parse_equation("2x^2+5x-3=2").is_none());
/// ```
pub fn parse_equation(text: &str) -> Option<Coefficients> {
    try_parse_equation(text).ok()
}

/// Parse an equation, reporting why it was rejected.
pub fn try_parse_equation(text: &str) -> Result<Coefficients, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let captures = EQUATION_PATTERN
        .captures(text)
        .ok_or_else(|| ParseError::Malformed(text.to_string()))?;

    // Groups 1-3 always participate when the pattern matches
    let [a, b, c] = [1, 2, 3].map(|i| captures.get(i).map_or("", |m| m.as_str()));

    Coefficients::try_new(parse_term(a)?, parse_term(b)?, parse_term(c)?)
}

/// Parse one signed coefficient; `+` prefixes are accepted by `i32::from_str`
fn parse_term(term: &str) -> Result<i32, ParseError> {
    term.parse::<i32>()
        .map_err(|_| ParseError::CoefficientOutOfRange(term.to_string()))
}
