//! Pluggable config validation strategies
//!
//! Separates shape checks on the assembled configuration from checks against
//! the project directory on disk.

use std::path::{Path, PathBuf};

use crate::bundle::{BundleConfig, EntryPoint, Loader, NAME_PLACEHOLDER};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()>;
}

/// Shape validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{base_config, ConfigValidator, PathTable, ProjectSettings, SchemaValidator};
///
/// let config = base_config(&PathTable::new("/site"), &ProjectSettings::default());
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, entry) in &config.entry {
            if let EntryPoint::Modules(modules) = entry {
                if modules.is_empty() {
                    return Err(ConfigError::EmptyEntry(name.clone()));
                }
            }
        }

        let has_script_rule = config.module.rules.iter().any(|rule| {
            rule.test.is_match(Path::new("index.js"))
                && rule
                    .loaders
                    .iter()
                    .any(|l| matches!(l, Loader::Babel { .. }))
        });
        if !has_script_rule {
            return Err(ConfigError::MissingScriptRule);
        }

        // Several entries written to one fixed filename would overwrite each other.
        if config.entry.len() > 1 && !config.output.filename.contains(NAME_PLACEHOLDER) {
            return Err(ConfigError::FilenamePattern(format!(
                "'{}' must contain {NAME_PLACEHOLDER} when there are {} entries",
                config.output.filename,
                config.entry.len()
            )));
        }

        if let Some(chunk) = &config.output.chunk_filename {
            if chunk.trim().is_empty() {
                return Err(ConfigError::FilenamePattern(
                    "chunk filename cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the shape checks, then verifies that path entries exist on disk.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a validator resolving relative entry paths against `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.entry.values() {
            if let EntryPoint::Path(path) = entry {
                let path = self.root.join(path);
                if !path.exists() {
                    return Err(ConfigError::EntryNotFound(path));
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for shape-only validation
pub fn validate_schema(config: &BundleConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BundleConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
