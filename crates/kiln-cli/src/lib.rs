//! Kiln CLI library.
//!
//! The `kiln` binary collects the lifecycle environment and the project
//! layout, hands them to [`kiln_config`] and writes the resulting bundler
//! configuration as JSON to stdout. Status lines and logs go to stderr.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`commands`] - Command implementations
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Colored status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
