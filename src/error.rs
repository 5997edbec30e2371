//! Error types for the degraded paths
//!
//! None of these are fatal. Callers log them, keep them where a test can
//! inspect them, and continue with a fallback.

use std::path::PathBuf;

use thiserror::Error;

/// Notes storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read notes from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed notes file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write notes to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("notes storage unavailable")]
    Unavailable,
}

/// Slide image load failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {path} has zero size")]
    Empty { path: PathBuf },
}

/// Settings file failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
