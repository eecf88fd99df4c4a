//! CLI library components for the content template checker.

pub mod logging;
pub mod pipeline;
