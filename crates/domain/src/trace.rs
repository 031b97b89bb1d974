use serde::Serialize;

/// Structured trace events emitted across the cronkoans crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    LessonsLoaded {
        dir: String,
        lessons: usize,
        koans: usize,
    },
    LessonSkipped {
        filename: String,
        reason: String,
    },
    KoanAttempted {
        koan_id: String,
        correct: bool,
        attempts: u32,
    },
    HintRevealed {
        koan_id: String,
        level: usize,
    },
    KoanCompleted {
        koan_id: String,
        attempts: u32,
        hints_used: u32,
    },
    ProgressSaved {
        path: String,
        completed: usize,
    },
    ProgressReset {
        path: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "ck_event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_event_tag() {
        let event = TraceEvent::KoanCompleted {
            koan_id: "basics-1".into(),
            attempts: 2,
            hints_used: 1,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "KoanCompleted");
        assert_eq!(json["koan_id"], "basics-1");
        assert_eq!(json["attempts"], 2);
    }
}
