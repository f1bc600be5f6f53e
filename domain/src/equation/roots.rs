//! Root formulas and the root set value object

use super::coefficients::Coefficients;
use serde::{Deserialize, Serialize};

/// `(-b + sqrt(d)) / 2a`
///
/// Expects `discriminant >= 0`; a negative value yields NaN.
///
/// ```
/// use quadratic_domain::{Coefficients, first_root};
///
/// let coeffs = Coefficients::new(2, 5, 2).unwrap();
/// assert_eq!(first_root(&coeffs, 9), -0.5);
/// ```
pub fn first_root(coefficients: &Coefficients, discriminant: i128) -> f64 {
    let (a, b) = float_ab(coefficients);
    (-b + (discriminant as f64).sqrt()) / (2.0 * a)
}

/// `(-b - sqrt(d)) / 2a`
///
/// Expects `discriminant >= 0`; a negative value yields NaN.
pub fn second_root(coefficients: &Coefficients, discriminant: i128) -> f64 {
    let (a, b) = float_ab(coefficients);
    (-b - (discriminant as f64).sqrt()) / (2.0 * a)
}

fn float_ab(coefficients: &Coefficients) -> (f64, f64) {
    (f64::from(coefficients.a()), f64::from(coefficients.b()))
}

/// Ordered real roots of an equation (Value Object)
///
/// Holds zero, one or two roots. With two roots the `+sqrt(d)` root comes
/// first. Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootSet(Vec<f64>);

impl RootSet {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn single(root: f64) -> Self {
        Self(vec![root])
    }

    pub fn pair(first: f64, second: f64) -> Self {
        Self(vec![first, second])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_root() {
        let coeffs = Coefficients::new(2, 5, 2).unwrap();
        assert_eq!(first_root(&coeffs, 9), -0.5);
    }

    #[test]
    fn test_second_root() {
        let coeffs = Coefficients::new(2, 5, 2).unwrap();
        assert_eq!(second_root(&coeffs, 9), -2.0);
    }

    #[test]
    fn test_zero_discriminant_roots_coincide() {
        let coeffs = Coefficients::new(2, 4, 2).unwrap();
        assert_eq!(first_root(&coeffs, 0), -1.0);
        assert_eq!(second_root(&coeffs, 0), -1.0);
    }

    #[test]
    fn test_first_root_not_below_second_for_positive_a() {
        for (a, b, c) in [(1, 0, -4), (3, -7, 2), (1, 1000, 1), (5, 0, 0)] {
            let coeffs = Coefficients::new(a, b, c).unwrap();
            let d = i128::from(b) * i128::from(b) - 4 * i128::from(a) * i128::from(c);
            assert!(first_root(&coeffs, d) >= second_root(&coeffs, d));
        }
    }

    #[test]
    fn test_negative_a_flips_order() {
        let coeffs = Coefficients::new(-1, 0, 4).unwrap();
        assert_eq!(first_root(&coeffs, 16), -2.0);
        assert_eq!(second_root(&coeffs, 16), 2.0);
    }

    #[test]
    fn test_negative_discriminant_is_nan() {
        let coeffs = Coefficients::new(1, 2, 3).unwrap();
        assert!(first_root(&coeffs, -8).is_nan());
        assert!(second_root(&coeffs, -8).is_nan());
    }

    #[test]
    fn test_root_set_shapes() {
        assert!(RootSet::none().is_empty());
        assert_eq!(RootSet::single(-1.0).as_slice(), &[-1.0]);

        let pair = RootSet::pair(-0.5, -2.0);
        assert_eq!(pair.len(), 2);
        assert_eq!(pair.iter().copied().collect::<Vec<_>>(), vec![-0.5, -2.0]);
        assert_eq!(pair.into_vec(), vec![-0.5, -2.0]);
    }

    #[test]
    fn test_root_set_serializes_as_array() {
        let json = serde_json::to_string(&RootSet::pair(-0.5, -2.0)).unwrap();
        assert_eq!(json, "[-0.5,-2.0]");
    }
}
