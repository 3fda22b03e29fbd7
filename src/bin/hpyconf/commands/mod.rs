//! Command implementations

pub mod completions;
pub mod plan;
pub mod stamp;
