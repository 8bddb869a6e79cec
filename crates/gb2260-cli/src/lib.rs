//! CLI library components for the division query tool.

pub mod cli;
pub mod commands;
pub mod logging;
