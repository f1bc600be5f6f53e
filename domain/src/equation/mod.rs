//! Quadratic equation domain
//!
//! The solving pipeline, in dependency order:
//!
//! ```text
//! text ──parse──▶ Coefficients ──discriminant──▶ i128 ──count_roots──▶ RootCount
//!                       │                          │
//!                       └────── first_root / second_root ──▶ RootSet
//! ```
//!
//! Every function here is pure; nothing is cached between calls except the
//! compiled grammar.

pub mod coefficients;
pub mod discriminant;
pub mod parsing;
pub mod roots;

// Re-export main types
pub use coefficients::Coefficients;
pub use discriminant::{RootCount, count_roots, discriminant};
pub use parsing::{parse_equation, try_parse_equation};
pub use roots::{RootSet, first_root, second_root};
