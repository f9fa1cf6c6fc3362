//! Error types shared across MoodTune crates.

use std::path::PathBuf;

/// Top-level error type for MoodTune operations.
#[derive(Debug, thiserror::Error)]
pub enum MoodtuneError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Model error: {message}")]
    Model { message: String },

    #[error("Acquisition error: {message}")]
    Acquisition { message: String },

    #[error("Classification error: {message}")]
    Classification { message: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using MoodtuneError.
pub type MoodtuneResult<T> = Result<T, MoodtuneError>;

impl MoodtuneError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model {
            message: msg.into(),
        }
    }

    pub fn acquisition(msg: impl Into<String>) -> Self {
        Self::Acquisition {
            message: msg.into(),
        }
    }

    pub fn classification(msg: impl Into<String>) -> Self {
        Self::Classification {
            message: msg.into(),
        }
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog {
            message: msg.into(),
        }
    }
}
