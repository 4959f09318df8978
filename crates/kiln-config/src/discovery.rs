//! File-based project discovery for CLI use
//!
//! Locates the project root, loads [`ProjectSettings`] and the dependency
//! manifest. Library users with in-memory inputs can skip this module and
//! build [`ConfigInputs`] directly.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use indexmap::IndexMap;
use tracing::debug;

use crate::builder::ConfigInputs;
use crate::env::LifecycleEnv;
use crate::error::{ConfigError, Result};
use crate::manifest::DependencyManifest;
use crate::paths::PathTable;
use crate::settings::ProjectSettings;

/// Optional settings file at the project root
pub const SETTINGS_FILE: &str = "kiln.toml";
/// Conventional manifest name; its `kiln` field may hold settings
pub const MANIFEST_FILE: &str = "package.json";
/// Prefix of environment variables overriding settings (`KILN_APP_DIR`, ...)
pub const ENV_PREFIX: &str = "KILN_";

const SETTING_KEYS: &[&str] = &["app_dir", "build_dir", "style_entry", "manifest", "html_title"];

/// A loaded project: where it lives, how it is laid out, what it depends on.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub settings: ProjectSettings,
    pub manifest: DependencyManifest,
    pub paths: PathTable,
}

impl Project {
    /// Borrow the project as builder inputs alongside an environment snapshot.
    pub fn inputs<'a>(&'a self, env: &'a LifecycleEnv) -> ConfigInputs<'a> {
        ConfigInputs {
            env,
            manifest: &self.manifest,
            paths: &self.paths,
            settings: &self.settings,
        }
    }
}

/// File-based project discovery
///
/// # Example
///
/// ```no_run
/// use kiln_config::ProjectDiscovery;
///
/// let project = ProjectDiscovery::new(".").load().unwrap();
/// println!("{}", project.paths.app().display());
/// ```
pub struct ProjectDiscovery {
    root: PathBuf,
}

impl ProjectDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Start at `start` and walk up to the nearest directory holding a
    /// `package.json` or `kiln.toml`. Falls back to `start` itself.
    pub fn from_nearest_root(start: impl AsRef<Path>) -> Self {
        let start = start.as_ref();
        let root = start
            .ancestors()
            .find(|dir| dir.join(MANIFEST_FILE).is_file() || dir.join(SETTINGS_FILE).is_file())
            .unwrap_or(start);
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load settings and manifest.
    ///
    /// Settings sources, lowest priority first: defaults, the `kiln` field of
    /// `package.json`, `kiln.toml`, `KILN_*` environment variables.
    ///
    /// # Errors
    ///
    /// `ConfigError::ManifestNotFound` when the configured manifest is
    /// missing, `ConfigError::ManifestParse` when it is malformed and
    /// `ConfigError::Settings` for invalid settings.
    pub fn load(&self) -> Result<Project> {
        let root_manifest = match DependencyManifest::load(self.root.join(MANIFEST_FILE)) {
            Ok(manifest) => Some(manifest),
            Err(ConfigError::ManifestNotFound(_)) => None,
            Err(err) => return Err(err),
        };

        let settings = self.load_settings(root_manifest.as_ref())?;
        debug!(?settings, root = %self.root.display(), "project settings");

        let manifest = match root_manifest {
            Some(manifest) if settings.manifest == Path::new(MANIFEST_FILE) => manifest,
            _ => DependencyManifest::load(self.root.join(&settings.manifest))?,
        };

        let paths = PathTable::from_settings(&self.root, &settings);
        Ok(Project {
            root: self.root.clone(),
            settings,
            manifest,
            paths,
        })
    }

    fn load_settings(&self, manifest: Option<&DependencyManifest>) -> Result<ProjectSettings> {
        let mut figment = Figment::from(Serialized::defaults(ProjectSettings::default()));

        if let Some(value) = manifest.and_then(|m| m.settings.as_ref()) {
            if !value.is_null() {
                figment = figment.merge(Serialized::defaults(value.clone()));
            }
        }

        figment = figment
            .merge(Toml::file(self.root.join(SETTINGS_FILE)))
            .merge(Serialized::defaults(env_overrides()));

        Ok(figment.extract()?)
    }
}

/// `KILN_*` overrides, values taken verbatim. Every setting is a string or a
/// path, so `KILN_BUILD_DIR=2024` is a directory name, not a number.
fn env_overrides() -> IndexMap<String, String> {
    Env::prefixed(ENV_PREFIX)
        .only(SETTING_KEYS)
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect()
}

/// Discover and load the project around the current directory
pub fn discover() -> Result<Project> {
    let cwd = std::env::current_dir()?;
    ProjectDiscovery::from_nearest_root(cwd).load()
}
