use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Interactive session
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Failed attempts on one koan before a hint is offered.
    #[serde(default = "d_hint_after_attempts")]
    pub hint_after_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hint_after_attempts: d_hint_after_attempts(),
        }
    }
}

fn d_hint_after_attempts() -> u32 {
    2
}
