/// Shared error type used across the cronkoans crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid lesson in {path}: {reason}")]
    InvalidLesson { path: String, reason: String },

    #[error("no lesson files found in {0}")]
    NoLessons(String),
}

pub type Result<T> = std::result::Result<T, Error>;
