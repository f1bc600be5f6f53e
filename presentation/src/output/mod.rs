//! Output formatting for solve results

pub mod console;
pub mod report;
