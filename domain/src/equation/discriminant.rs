//! Discriminant and root classification

use super::coefficients::Coefficients;
use serde::{Deserialize, Serialize};

/// Compute `b^2 - 4ac`.
///
/// Widened to `i128`: exact for every `i32` triple.
///
/// ```
/// use quadratic_domain::{Coefficients, discriminant};
///
/// let coeffs = Coefficients::new(1, 4, 2).unwrap();
/// assert_eq!(discriminant(&coeffs), 8);
/// ```
pub fn discriminant(coefficients: &Coefficients) -> i128 {
    let a = i128::from(coefficients.a());
    let b = i128::from(coefficients.b());
    let c = i128::from(coefficients.c());

    b * b - 4 * a * c
}

/// Number of real roots implied by a discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootCount {
    /// Negative discriminant, no real roots
    None,
    /// Zero discriminant, one repeated root
    One,
    /// Positive discriminant, two distinct roots
    Two,
}

impl RootCount {
    pub fn count(self) -> usize {
        match self {
            RootCount::None => 0,
            RootCount::One => 1,
            RootCount::Two => 2,
        }
    }
}

impl std::fmt::Display for RootCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Classify a discriminant into the number of real roots
pub fn count_roots(discriminant: i128) -> RootCount {
    match discriminant.signum() {
        -1 => RootCount::None,
        0 => RootCount::One,
        _ => RootCount::Two,
    }
}
