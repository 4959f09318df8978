//! Lifecycle mode selection.
//!
//! The package manager exposes the script being run (`npm run build`,
//! `npm start`, ...) as a lifecycle token. Kiln maps that token onto one of
//! two configuration overlays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Lifecycle tokens that select the development overlay.
pub const DEVELOPMENT_TOKENS: &[&str] = &["start"];

/// Lifecycle tokens that select the production overlay.
pub const PRODUCTION_TOKENS: &[&str] = &["build", "stats"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// In-memory dev server, hot replacement, runtime style injection
    Development,
    /// Hashed output, vendor splitting, CSS extraction, minification
    Production,
}

impl Mode {
    /// Select a mode from a lifecycle token.
    ///
    /// An absent or empty token means the bundler was invoked outside a
    /// package script, which selects development.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::Mode;
    ///
    /// assert_eq!(Mode::from_lifecycle(None).unwrap(), Mode::Development);
    /// assert_eq!(Mode::from_lifecycle(Some("stats")).unwrap(), Mode::Production);
    /// assert!(Mode::from_lifecycle(Some("test")).is_err());
    /// ```
    pub fn from_lifecycle(token: Option<&str>) -> Result<Self> {
        match token {
            None | Some("") => Ok(Mode::Development),
            Some(t) if DEVELOPMENT_TOKENS.contains(&t) => Ok(Mode::Development),
            Some(t) if PRODUCTION_TOKENS.contains(&t) => Ok(Mode::Production),
            Some(other) => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
