mod lessons;
mod logging;
mod session;

pub use lessons::*;
pub use logging::*;
pub use session::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lessons: LessonsConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.lessons.dir.as_os_str().is_empty() {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                field: "lessons.dir".into(),
                message: "lessons directory must not be empty".into(),
            });
        }

        // Exclusions are plain file names, never paths.
        for (i, name) in self.lessons.exclude.iter().enumerate() {
            if name.contains('/') || name.contains('\\') {
                issues.push(ConfigIssue {
                    severity: ConfigSeverity::Warning,
                    field: format!("lessons.exclude[{i}]"),
                    message: format!("'{name}' looks like a path; only file names are matched"),
                });
            }
        }

        if self.session.hint_after_attempts == 0 {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                field: "session.hint_after_attempts".into(),
                message: "0 offers a hint after every failed attempt".into(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                field: "logging.filter".into(),
                message: "empty filter disables all log output".into(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_issues() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn empty_lessons_dir_is_an_error() {
        let mut config = Config::default();
        config.lessons.dir = "".into();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Error);
        assert_eq!(issues[0].field, "lessons.dir");
    }

    #[test]
    fn zero_hint_threshold_is_a_warning() {
        let mut config = Config::default();
        config.session.hint_after_attempts = 0;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Warning);
        assert_eq!(
            issues[0].to_string(),
            "[WARN] session.hint_after_attempts: 0 offers a hint after every failed attempt"
        );
    }

    #[test]
    fn path_like_exclusion_is_a_warning() {
        let mut config = Config::default();
        config.lessons.exclude.push("drafts/old.yaml".into());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "lessons.exclude[1]");
    }
}
