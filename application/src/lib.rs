//! Application layer for quadratic-solver
//!
//! This crate contains the solve use case that composes the domain
//! functions into a single entry point. It depends only on the domain layer.

pub mod use_cases;

// Re-export commonly used types
pub use use_cases::solve_equation::{
    SolveEquationError, SolveEquationInput, SolveEquationOutput, SolveEquationUseCase, solve,
};
