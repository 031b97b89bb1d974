use chrono::{DateTime, Utc};

/// Aggregate progress against a known total number of koans.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_koans: usize,
    pub completed_koans: usize,
    pub remaining_koans: usize,
    pub percent_complete: f64,
    pub total_attempts: u32,
    pub total_hints_used: u32,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stats {
    pub fn is_complete(&self) -> bool {
        self.total_koans > 0 && self.remaining_koans == 0
    }
}
