//! Snapshot of the environment variables the configuration depends on.
//!
//! Builders never read the process environment themselves; callers take a
//! [`LifecycleEnv`] snapshot once and pass it in.

use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Variable holding the package script currently being run.
pub const LIFECYCLE_VAR: &str = "npm_lifecycle_event";
/// Dev server bind host.
pub const HOST_VAR: &str = "HOST";
/// Dev server bind port.
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifecycleEnv {
    /// Lifecycle token, e.g. `start` or `build`
    pub lifecycle: Option<String>,

    /// Dev server host. No default is applied when unset.
    pub host: Option<String>,

    /// Dev server port, kept as the raw string until the overlay parses it.
    pub port: Option<String>,
}

impl LifecycleEnv {
    /// Capture the relevant variables from the current process.
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Capture the relevant variables from an arbitrary key/value source.
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::LifecycleEnv;
    ///
    /// let env = LifecycleEnv::from_vars([("npm_lifecycle_event", "build"), ("PORT", "")]);
    /// assert_eq!(env.lifecycle.as_deref(), Some("build"));
    /// assert!(env.port.is_none());
    /// ```
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut env = Self::default();
        for (key, value) in vars {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                LIFECYCLE_VAR => env.lifecycle = Some(value.to_string()),
                HOST_VAR => env.host = Some(value.to_string()),
                PORT_VAR => env.port = Some(value.to_string()),
                _ => {}
            }
        }
        env
    }

    /// Replace the lifecycle token, e.g. from a command-line override.
    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: Option<String>) -> Self {
        if lifecycle.is_some() {
            self.lifecycle = lifecycle;
        }
        self
    }

    /// Parse the port, if one is set.
    pub fn parsed_port(&self) -> Result<Option<u16>> {
        self.port
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                    value: raw.to_string(),
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unrelated_variables() {
        let env = LifecycleEnv::from_vars([("PATH", "/usr/bin"), ("HOST", "0.0.0.0")]);
        assert_eq!(env.host.as_deref(), Some("0.0.0.0"));
        assert!(env.lifecycle.is_none());
        assert!(env.port.is_none());
    }

    #[test]
    fn parses_port() {
        let env = LifecycleEnv::from_vars([("PORT", "8080")]);
        assert_eq!(env.parsed_port().unwrap(), Some(8080));
    }

    #[test]
    fn rejects_out_of_range_port() {
        let env = LifecycleEnv::from_vars([("PORT", "70000")]);
        assert!(matches!(
            env.parsed_port(),
            Err(ConfigError::InvalidPort { ref value }) if value == "70000"
        ));
    }

    #[test]
    fn empty_host_counts_as_unset() {
        let env = LifecycleEnv::from_vars([("HOST", ""), ("PORT", "3000")]);
        assert!(env.host.is_none());
        assert_eq!(env.port.as_deref(), Some("3000"));
    }

    #[test]
    fn missing_port_is_none() {
        assert_eq!(LifecycleEnv::default().parsed_port().unwrap(), None);
    }

    #[test]
    fn lifecycle_override_only_applies_when_given() {
        let env = LifecycleEnv::from_vars([("npm_lifecycle_event", "start")]);
        let kept = env.clone().with_lifecycle(None);
        assert_eq!(kept.lifecycle.as_deref(), Some("start"));
        let replaced = env.with_lifecycle(Some("build".into()));
        assert_eq!(replaced.lifecycle.as_deref(), Some("build"));
    }
}
