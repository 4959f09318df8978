//! Error types for configuration assembly, loading, and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Mode selection
    #[error("unknown lifecycle event '{0}' (expected 'start', 'build' or 'stats')")]
    UnknownMode(String),

    // Environment snapshot
    #[error("invalid PORT value '{value}': expected a number between 0 and 65535")]
    InvalidPort { value: String },

    // Dependency manifest
    #[error("dependency manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to parse dependency manifest {}: {message}", .path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("dependency manifest {} has no 'dependencies' object", .0.display())]
    MissingDependencies(PathBuf),

    // Rule construction
    #[error("invalid rule pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("entry '{0}' has no modules")]
    EmptyEntry(String),

    #[error("script transform rule is missing from the module rules")]
    MissingScriptRule,

    #[error("invalid output filename pattern: {0}")]
    FilenamePattern(String),

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    // Settings loading
    #[error("invalid project settings: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Settings(err.to_string())
    }
}
