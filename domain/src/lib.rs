//! Domain layer for quadratic-solver
//!
//! This crate contains the equation parser, the discriminant and root
//! classification, and the root formulas. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Accepted input
//!
//! Exactly `<A>x^2<B>x<C>=0`, where `A` is an integer with an optional `-`
//! and `B`, `C` are integers with a mandatory `+` or `-`:
//!
//! ```
//! use quadratic_domain::{count_roots, discriminant, parse_equation, RootCount};
//!
//! let coeffs = parse_equation("2x^2+5x+2=0").unwrap();
//! assert_eq!(discriminant(&coeffs), 9);
//! assert_eq!(count_roots(discriminant(&coeffs)), RootCount::Two);
//! ```

pub mod config;
pub mod core;
pub mod equation;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::ParseError;
pub use equation::{
    Coefficients, RootCount, RootSet, count_roots, discriminant, first_root, parse_equation,
    second_root, try_parse_equation,
};
