//! Errors raised while loading curriculum data and configuration.

use std::path::PathBuf;

/// Failures at the load boundary.
///
/// Everything past this boundary is infallible: the graph core prefers
/// silent omission over reported failure.
#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    /// A data or config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset document is not valid JSON or misses a mandatory field.
    #[error("malformed dataset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A config file is not valid TOML.
    #[error("malformed config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Only grades 7 and 8 have knowledge bases.
    #[error("unknown grade {0}, expected 7 or 8")]
    UnknownGrade(u8),
}

pub type Result<T> = std::result::Result<T, CurriculumError>;
