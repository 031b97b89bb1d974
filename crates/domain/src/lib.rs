//! Shared types for the cronkoans crates: error, configuration, trace events.

pub mod config;
pub mod error;
pub mod trace;
