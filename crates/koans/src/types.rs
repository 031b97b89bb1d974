use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder in [`Koan::incomplete`] that the answer fills.
pub const BLANK: &str = "__";

/// A single exercise.
///
/// Every text field defaults to empty so a file with missing fields still
/// parses and is rejected by validation with a precise message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Koan {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub question: String,
    /// Expression with one `__` blank, e.g. `__ * * * *`.
    #[serde(default)]
    pub incomplete: String,
    #[serde(default)]
    pub answer: String,
    /// Revealed in order, one per request.
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

impl Koan {
    /// The incomplete expression with its first blank replaced by the answer.
    pub fn complete_expression(&self) -> String {
        self.incomplete.replacen(BLANK, &self.answer, 1)
    }

    /// Compare a learner's answer with the expected one, ignoring case and
    /// surrounding whitespace.
    pub fn check_answer(&self, user_answer: &str) -> bool {
        normalize(user_answer) == normalize(&self.answer)
    }

    /// Hint at `level` (0-based), if there is one.
    pub fn hint(&self, level: usize) -> Option<&str> {
        self.hints.get(level).map(String::as_str)
    }

    /// Whether a hint exists after `level`.
    pub fn has_more_hints(&self, level: usize) -> bool {
        level + 1 < self.hints.len()
    }
}

impl fmt::Display for Koan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}\nQuestion: {}\nExpression: {}",
            self.id, self.description, self.question, self.incomplete
        )
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// A titled group of koans loaded from one YAML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub koans: Vec<Koan>,
    /// Source file; set by the loader.
    #[serde(skip)]
    pub filename: String,
}
