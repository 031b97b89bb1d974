//! Learner progress, persisted as a JSON file.

pub mod stats;
pub mod tracker;

pub use stats::Stats;
pub use tracker::{KoanProgress, Progress, Tracker, PROGRESS_VERSION};
