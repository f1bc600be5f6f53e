//! Use cases

pub mod solve_equation;
