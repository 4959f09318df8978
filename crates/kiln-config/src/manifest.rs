//! Dependency manifest (`package.json`) access.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// The parts of a `package.json` the configuration reads.
///
/// Dependency order is preserved so the vendor entry lists modules in the
/// order the manifest declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DependencyManifest {
    #[serde(skip)]
    path: PathBuf,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub dependencies: Option<IndexMap<String, String>>,

    /// Raw `kiln` field, merged into the project settings by discovery
    #[serde(default, rename = "kiln")]
    pub settings: Option<Value>,
}

impl DependencyManifest {
    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ConfigError::ManifestNotFound(path.to_path_buf()),
            _ => ConfigError::Io(err),
        })?;
        Self::from_json_str(&content, path)
    }

    /// Parse manifest content; `path` is only used for error messages.
    pub fn from_json_str(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut manifest: DependencyManifest =
            serde_json::from_str(content).map_err(|e| ConfigError::ManifestParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        manifest.path = path;
        Ok(manifest)
    }

    /// Build a manifest in memory from dependency names and versions.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::DependencyManifest;
    ///
    /// let manifest = DependencyManifest::with_dependencies([("react", "^15.0.0")]);
    /// assert_eq!(manifest.vendor_modules().unwrap(), vec!["react".to_string()]);
    /// ```
    pub fn with_dependencies<I, K, V>(deps: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: PathBuf::from("package.json"),
            name: None,
            dependencies: Some(deps.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
            settings: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all runtime dependencies, in manifest order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingDependencies` when the manifest has no
    /// `dependencies` object at all. An empty object yields an empty list.
    pub fn vendor_modules(&self) -> Result<Vec<String>> {
        let deps = self
            .dependencies
            .as_ref()
            .ok_or_else(|| ConfigError::MissingDependencies(self.path.clone()))?;
        Ok(deps.keys().cloned().collect())
    }
}
