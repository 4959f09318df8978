//! Project path table.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::settings::ProjectSettings;

/// Absolute locations of the project directories the configuration refers to.
///
/// Computed once from the project root and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathTable {
    root: PathBuf,
    app: PathBuf,
    build: PathBuf,
    style: PathBuf,
}

impl PathTable {
    /// Build the table for `root` using the default layout
    /// (`app/`, `build/`, `app/main.css`).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::from_settings(root, &ProjectSettings::default())
    }

    /// Build the table for `root` using the layout described by `settings`.
    ///
    /// Absolute settings paths are kept as-is.
    pub fn from_settings(root: impl AsRef<Path>, settings: &ProjectSettings) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            app: root.join(&settings.app_dir),
            build: root.join(&settings.build_dir),
            style: root.join(&settings.style_entry),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Application source directory
    pub fn app(&self) -> &Path {
        &self.app
    }

    /// Build output directory
    pub fn build(&self) -> &Path {
        &self.build
    }

    /// Stylesheet entry point
    pub fn style(&self) -> &Path {
        &self.style
    }
}
