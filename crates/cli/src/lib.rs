//! The `cronkoans` command-line learning tool.

pub mod cli;
pub mod prompt;
pub mod session;
pub mod ui;
