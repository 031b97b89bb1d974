use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lessons
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonsConfig {
    /// Directory scanned for `*.yaml` lesson files.
    #[serde(default = "d_lessons_dir")]
    pub dir: PathBuf,
    /// File names the loader skips.
    #[serde(default = "d_exclude")]
    pub exclude: Vec<String>,
}

impl Default for LessonsConfig {
    fn default() -> Self {
        Self {
            dir: d_lessons_dir(),
            exclude: d_exclude(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Progress
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProgressConfig {
    /// Progress file. `None` means `.cronkoans_progress.json` in the home
    /// directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// File name used when no explicit progress path is configured.
pub const DEFAULT_PROGRESS_FILE: &str = ".cronkoans_progress.json";

// ── serde default helpers ───────────────────────────────────────────

fn d_lessons_dir() -> PathBuf {
    PathBuf::from("lessons")
}
fn d_exclude() -> Vec<String> {
    vec!["template.yaml".into()]
}
