//! CLI library components for the order validator.

pub mod commands;
pub mod logging;
pub mod types;
