//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ParseError`] — why an equation text was rejected

pub mod error;
