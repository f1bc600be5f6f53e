//! Coefficients value object

use crate::core::error::ParseError;
use serde::{Deserialize, Serialize};

/// The ordered triple (a, b, c) of `ax^2 + bx + c = 0` (Value Object)
///
/// `a` is never zero: a triple with `a == 0` is not a quadratic and
/// cannot be constructed.
///
/// # Example
///
/// ```
/// use quadratic_domain::Coefficients;
///
/// let coeffs = Coefficients::new(3, 4, 1).unwrap();
/// assert_eq!(coeffs.to_string(), "3x^2+4x+1=0");
/// assert!(Coefficients::new(0, 4, 1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CoefficientsRepr", into = "CoefficientsRepr")]
pub struct Coefficients {
    a: i32,
    b: i32,
    c: i32,
}

impl Coefficients {
    /// Create coefficients, returning None if `a` is zero
    pub fn new(a: i32, b: i32, c: i32) -> Option<Self> {
        Self::try_new(a, b, c).ok()
    }

    /// Create coefficients, reporting [`ParseError::NotQuadratic`] if `a` is zero
    pub fn try_new(a: i32, b: i32, c: i32) -> Result<Self, ParseError> {
        if a == 0 {
            return Err(ParseError::NotQuadratic);
        }
        Ok(Self { a, b, c })
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    pub fn c(&self) -> i32 {
        self.c
    }

    /// The triple as `[a, b, c]`
    pub fn as_array(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }

    /// Evaluate `ax^2 + bx + c` at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let (a, b, c) = (f64::from(self.a), f64::from(self.b), f64::from(self.c));
        a * x * x + b * x + c
    }
}

/// Renders the canonical equation form accepted by the parser
impl std::fmt::Display for Coefficients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x^2{:+}x{:+}=0", self.a, self.b, self.c)
    }
}

impl std::str::FromStr for Coefficients {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parsing::try_parse_equation(s)
    }
}

#[derive(Serialize, Deserialize)]
struct CoefficientsRepr {
    a: i32,
    b: i32,
    c: i32,
}

impl From<Coefficients> for CoefficientsRepr {
    fn from(coeffs: Coefficients) -> Self {
        Self {
            a: coeffs.a,
            b: coeffs.b,
            c: coeffs.c,
        }
    }
}

impl TryFrom<CoefficientsRepr> for Coefficients {
    type Error = ParseError;

    fn try_from(repr: CoefficientsRepr) -> Result<Self, Self::Error> {
        Coefficients::try_new(repr.a, repr.b, repr.c)
    }
}
