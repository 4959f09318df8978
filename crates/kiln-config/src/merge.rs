//! Mode overlays and how they combine with the base configuration.
//!
//! Merge rules:
//! - entry maps merge key-wise; an overlay key replaces the base entry of the
//!   same name, new keys are appended in overlay order
//! - fields set in the overlay replace the base value, unset fields keep it
//! - lists (resolve extensions, rules, plugins) concatenate, base first

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::bundle::{BundleConfig, DevServer, Devtool, EntryPoint, ModuleRule, Plugin};

/// Mode-specific fragment applied on top of the base configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub entry: IndexMap<String, EntryPoint>,
    pub output: OutputOverlay,
    pub extensions: Vec<String>,
    pub rules: Vec<ModuleRule>,
    pub plugins: Vec<Plugin>,
    pub devtool: Option<Devtool>,
    pub dev_server: Option<DevServer>,
}

/// Output fields an overlay may override individually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOverlay {
    pub path: Option<PathBuf>,
    pub filename: Option<String>,
    pub chunk_filename: Option<String>,
}

impl BundleConfig {
    /// Apply `overlay`, returning a new configuration. `self` is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{base_config, Overlay, PathTable, Plugin, ProjectSettings};
    ///
    /// let base = base_config(&PathTable::new("/site"), &ProjectSettings::default());
    /// let overlay = Overlay {
    ///     plugins: vec![Plugin::HotModuleReplacement],
    ///     ..Overlay::default()
    /// };
    /// let merged = base.merge(&overlay);
    /// assert_eq!(merged.plugins.len(), base.plugins.len() + 1);
    /// ```
    #[must_use]
    pub fn merge(&self, overlay: &Overlay) -> BundleConfig {
        let mut merged = self.clone();

        for (name, entry) in &overlay.entry {
            merged.entry.insert(name.clone(), entry.clone());
        }

        if let Some(path) = &overlay.output.path {
            merged.output.path = path.clone();
        }
        if let Some(filename) = &overlay.output.filename {
            merged.output.filename = filename.clone();
        }
        if let Some(chunk_filename) = &overlay.output.chunk_filename {
            merged.output.chunk_filename = Some(chunk_filename.clone());
        }

        merged
            .resolve
            .extensions
            .extend(overlay.extensions.iter().cloned());
        merged.module.rules.extend(overlay.rules.iter().cloned());
        merged.plugins.extend(overlay.plugins.iter().cloned());

        if overlay.devtool.is_some() {
            merged.devtool = overlay.devtool;
        }
        if overlay.dev_server.is_some() {
            merged.dev_server = overlay.dev_server.clone();
        }

        merged
    }
}
