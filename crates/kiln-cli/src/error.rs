//! Error handling for the Kiln CLI.
//!
//! Library failures arrive as [`kiln_config::ConfigError`] and are wrapped in
//! [`CliError`]. At the top of `main` every error is turned into a
//! `miette::Report` with a hint, see [`cli_error_to_miette`].

mod report;

use std::path::PathBuf;

use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, assembling or validating the configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] kiln_config::ConfigError),

    /// A command-line argument names something unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use kiln_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let dir = Path::new("web");
    /// std::fs::canonicalize(dir).with_path(dir)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_config::ConfigError;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::UnknownMode("test".into()).into();
        assert!(matches!(cli_err, CliError::Config(ConfigError::UnknownMode(_))));
        assert!(cli_err.to_string().contains("unknown lifecycle event 'test'"));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result.with_path("/work/kanban/kiln.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p.ends_with("kiln.toml")));
    }

    #[test]
    fn test_result_ext_with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_path("/work").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NoEntries);
        let err = result.context("Failed to validate").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to validate: "));
        assert!(msg.contains("no entries specified"));
    }
}
