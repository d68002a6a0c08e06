use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexitriError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("Audio directory not found: {path}")]
    AudioDirNotFound { path: PathBuf },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: {message}")]
    ConfigValue { key: String, message: String },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexitriError>;

impl LexitriError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 2,
            Self::InvalidJson { .. } => 3,
            Self::AudioDirNotFound { .. } => 4,
            _ => 1,
        }
    }
}
