//! Progress tracker backed by a JSON file.
//!
//! Every mutation is written to disk immediately, so an interrupted session
//! never loses a completed koan.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use ck_domain::error::Result;
use ck_domain::trace::TraceEvent;

use crate::stats::Stats;

/// Format version written to new progress files.
pub const PROGRESS_VERSION: &str = "1.0";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Progress data
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KoanProgress {
    pub koan_id: String,
    pub completed: bool,
    pub attempts: u32,
    pub hints_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl KoanProgress {
    fn new(koan_id: &str) -> Self {
        Self {
            koan_id: koan_id.to_owned(),
            completed: false,
            attempts: 0,
            hints_used: 0,
            completed_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub koans: HashMap<String, KoanProgress>,
    #[serde(default)]
    pub last_koan_id: String,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub version: String,
}

impl Progress {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            koans: HashMap::new(),
            last_koan_id: String::new(),
            started_at: now,
            updated_at: now,
            version: PROGRESS_VERSION.into(),
        }
    }

    fn entry(&mut self, koan_id: &str) -> &mut KoanProgress {
        self.koans
            .entry(koan_id.to_owned())
            .or_insert_with(|| KoanProgress::new(koan_id))
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tracker
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct Tracker {
    path: PathBuf,
    progress: RwLock<Progress>,
}

impl Tracker {
    /// Open the progress file at `path`. A missing file starts fresh
    /// progress (nothing is written until the first mutation); a file that
    /// cannot be read or parsed is an error.
    pub fn open(path: &Path) -> Result<Self> {
        let progress = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        } else {
            Progress::new()
        };

        tracing::info!(
            koans = progress.koans.len(),
            path = %path.display(),
            "progress loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            progress: RwLock::new(progress),
        })
    }

    /// Write progress to disk, stamping `updated_at`.
    pub fn save(&self) -> Result<()> {
        let (json, completed) = {
            let mut progress = self.progress.write();
            progress.updated_at = Utc::now();
            let completed = progress.koans.values().filter(|k| k.completed).count();
            (serde_json::to_string_pretty(&*progress)?, completed)
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, json)?;

        TraceEvent::ProgressSaved {
            path: self.path.display().to_string(),
            completed,
        }
        .emit();
        Ok(())
    }

    pub fn is_completed(&self, koan_id: &str) -> bool {
        self.progress
            .read()
            .koans
            .get(koan_id)
            .is_some_and(|k| k.completed)
    }

    /// Mark a koan completed, overwriting its counters with the session's
    /// totals, and remember it as the last koan worked on.
    pub fn mark_completed(&self, koan_id: &str, attempts: u32, hints_used: u32) -> Result<()> {
        {
            let mut progress = self.progress.write();
            let entry = progress.entry(koan_id);
            entry.completed = true;
            entry.attempts = attempts;
            entry.hints_used = hints_used;
            entry.completed_at = Some(Utc::now());
            progress.last_koan_id = koan_id.to_owned();
        }
        TraceEvent::KoanCompleted {
            koan_id: koan_id.to_owned(),
            attempts,
            hints_used,
        }
        .emit();
        self.save()
    }

    pub fn record_attempt(&self, koan_id: &str) -> Result<()> {
        self.progress.write().entry(koan_id).attempts += 1;
        self.save()
    }

    pub fn record_hint(&self, koan_id: &str) -> Result<()> {
        self.progress.write().entry(koan_id).hints_used += 1;
        self.save()
    }

    pub fn get(&self, koan_id: &str) -> Option<KoanProgress> {
        self.progress.read().koans.get(koan_id).cloned()
    }

    pub fn last_koan_id(&self) -> Option<String> {
        let progress = self.progress.read();
        if progress.last_koan_id.is_empty() {
            None
        } else {
            Some(progress.last_koan_id.clone())
        }
    }

    pub fn completed_count(&self) -> usize {
        self.progress
            .read()
            .koans
            .values()
            .filter(|k| k.completed)
            .count()
    }

    pub fn total_attempts(&self) -> u32 {
        self.progress.read().koans.values().map(|k| k.attempts).sum()
    }

    pub fn total_hints(&self) -> u32 {
        self.progress.read().koans.values().map(|k| k.hints_used).sum()
    }

    /// Discard all progress and persist the fresh state.
    pub fn reset(&self) -> Result<()> {
        *self.progress.write() = Progress::new();
        TraceEvent::ProgressReset {
            path: self.path.display().to_string(),
        }
        .emit();
        self.save()
    }

    pub fn stats(&self, total_koans: usize) -> Stats {
        let completed = self.completed_count();
        let percent_complete = if total_koans > 0 {
            completed as f64 / total_koans as f64 * 100.0
        } else {
            0.0
        };
        let progress = self.progress.read();
        Stats {
            total_koans,
            completed_koans: completed,
            remaining_koans: total_koans.saturating_sub(completed),
            percent_complete,
            total_attempts: progress.koans.values().map(|k| k.attempts).sum(),
            total_hints_used: progress.koans.values().map(|k| k.hints_used).sum(),
            started_at: progress.started_at,
            updated_at: progress.updated_at,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the progress file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
