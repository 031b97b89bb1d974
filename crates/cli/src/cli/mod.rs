pub mod check;
pub mod config;
pub mod status;
pub mod validate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use ck_domain::config::{Config, DEFAULT_PROGRESS_FILE};
use ck_koans::Catalog;
use ck_progress::Tracker;

/// Learn crontab syntax through practice.
#[derive(Debug, Parser)]
#[command(name = "cronkoans", version, about)]
pub struct Cli {
    /// Lessons directory (overrides `lessons.dir` from the config file).
    #[arg(long, global = true)]
    pub lessons: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work through the koans interactively (default when no subcommand is given).
    #[command(alias = "interactive")]
    Start,
    /// Check that every koan's answer completes a valid cron expression.
    Validate,
    /// Validate and describe a single cron expression.
    Check {
        /// The expression, quoted or as separate fields (e.g. `"*/5 * * * *"`).
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Show progress statistics.
    Status,
    /// List lessons with per-lesson completion.
    List,
    /// Reset all progress.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any issues.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `CK_CONFIG` (or
/// `cronkoans.toml` by default).  Returns the parsed [`Config`] and the
/// path that was used.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path = std::env::var("CK_CONFIG").unwrap_or_else(|_| "cronkoans.toml".into());

    let config = Config::load(std::path::Path::new(&config_path))
        .with_context(|| format!("loading {config_path}"))?;

    Ok((config, config_path))
}

/// Resolve the progress file: the configured path, or the default file in
/// the home directory.
pub fn progress_path(config: &Config) -> anyhow::Result<PathBuf> {
    if let Some(path) = &config.progress.path {
        return Ok(path.clone());
    }
    let home = dirs::home_dir()
        .context("cannot determine home directory; set progress.path in the config file")?;
    Ok(home.join(DEFAULT_PROGRESS_FILE))
}

pub fn open_catalog(config: &Config) -> anyhow::Result<Catalog> {
    Catalog::load(&config.lessons.dir, &config.lessons.exclude).context("failed to load lessons")
}

pub fn open_tracker(config: &Config) -> anyhow::Result<Tracker> {
    let path = progress_path(config)?;
    Tracker::open(&path).with_context(|| format!("failed to open progress file {}", path.display()))
}
