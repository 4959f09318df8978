use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Plugins the configuration can enable, with their options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    /// Generate an HTML page referencing the emitted bundles
    HtmlShell { title: String },

    /// Swap changed modules in the running page
    HotModuleReplacement,

    /// Install missing packages when a new import is seen. With `save` the
    /// package is also written to the dependency manifest.
    AutoInstall { save: bool },

    /// Write extracted styles to `filename`
    ExtractCss { filename: String },

    /// Remove `paths` before output is written
    CleanOutput { paths: Vec<PathBuf> },

    /// Move shared modules into the named chunks; the last name receives the
    /// runtime manifest
    CommonsChunk { names: Vec<String> },

    /// Replace expressions with literal source text at compile time
    Define { definitions: IndexMap<String, String> },

    /// Minify emitted scripts
    Minify { compress: CompressOptions },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Report dropped code and similar compressor warnings
    pub warnings: bool,
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::HtmlShell { .. } => "html-shell",
            Plugin::HotModuleReplacement => "hot-module-replacement",
            Plugin::AutoInstall { .. } => "auto-install",
            Plugin::ExtractCss { .. } => "extract-css",
            Plugin::CleanOutput { .. } => "clean-output",
            Plugin::CommonsChunk { .. } => "commons-chunk",
            Plugin::Define { .. } => "define",
            Plugin::Minify { .. } => "minify",
        }
    }

    /// `define` plugin replacing `process.env.NODE_ENV` with the quoted
    /// literal `value`.
    pub fn node_env(value: &str) -> Self {
        let mut definitions = IndexMap::new();
        definitions.insert(
            "process.env.NODE_ENV".to_string(),
            serde_json::Value::from(value).to_string(),
        );
        Plugin::Define { definitions }
    }
}
