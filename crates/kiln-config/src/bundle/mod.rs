//! Typed model of the configuration handed to the bundler.

mod dev;
mod plugin;
mod rule;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use dev::{DevServer, Devtool, StatsPreset};
pub use plugin::{CompressOptions, Plugin};
pub use rule::{FileMatcher, Loader, ModuleRule};

use crate::error::ConfigError;

/// Placeholder replaced by the entry or chunk name in filename patterns.
pub const NAME_PLACEHOLDER: &str = "[name]";
/// Placeholder replaced by the content digest in filename patterns.
pub const HASH_PLACEHOLDER: &str = "[chunkhash]";

/// Complete bundler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    /// Named entry points, in declaration order
    pub entry: IndexMap<String, EntryPoint>,

    pub output: OutputOptions,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default)]
    pub module: ModuleOptions,

    #[serde(default)]
    pub plugins: Vec<Plugin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,
}

/// What an entry point starts graph traversal from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryPoint {
    /// A file or a directory with an index module
    Path(PathBuf),
    /// A list of package names bundled together
    Modules(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Output directory
    pub path: PathBuf,

    /// Filename pattern for entry chunks
    pub filename: String,

    /// Filename pattern for non-entry chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, when an import omits one. The empty
    /// string allows imports that already carry their extension.
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: vec![String::new(), ".js".to_string(), ".jsx".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
}

impl BundleConfig {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::Settings(e.to_string()))
    }

    /// Rules the bundler would apply to `path`, in pipeline order.
    pub fn rules_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a ModuleRule> + 'a {
        self.module.rules.iter().filter(move |rule| rule.applies_to(path))
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Whether output filenames embed a content hash
    pub fn uses_content_hash(&self) -> bool {
        self.output.filename.contains(HASH_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BundleConfig {
        let mut entry = IndexMap::new();
        entry.insert("app".to_string(), EntryPoint::Path("/p/app".into()));
        entry.insert(
            "vendor".to_string(),
            EntryPoint::Modules(vec!["react".to_string()]),
        );
        BundleConfig {
            entry,
            output: OutputOptions {
                path: "/p/build".into(),
                filename: "[name].[chunkhash].js".into(),
                chunk_filename: Some("[chunkhash].js".into()),
            },
            resolve: ResolveOptions::default(),
            module: ModuleOptions {
                rules: vec![ModuleRule::new(
                    FileMatcher::scripts(),
                    vec![Loader::Babel { cache_directory: true }],
                    "/p/app",
                )],
            },
            plugins: vec![Plugin::HotModuleReplacement],
            devtool: None,
            dev_server: None,
        }
    }

    #[test]
    fn serializes_with_bundler_field_names() {
        let value = sample().to_value().unwrap();
        assert_eq!(value["output"]["chunkFilename"], "[chunkhash].js");
        assert_eq!(value["entry"]["app"], "/p/app");
        assert_eq!(value["entry"]["vendor"], serde_json::json!(["react"]));
        assert_eq!(value["resolve"]["extensions"], serde_json::json!(["", ".js", ".jsx"]));
        assert!(value.get("devServer").is_none());
    }

    #[test]
    fn value_round_trip_preserves_entry_order() {
        let config = sample();
        let back: BundleConfig = serde_json::from_value(config.to_value().unwrap()).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.entry.keys().collect::<Vec<_>>(), vec!["app", "vendor"]);
    }

    #[test]
    fn rules_for_filters_by_test_and_include() {
        let config = sample();
        assert_eq!(config.rules_for(Path::new("/p/app/index.jsx")).count(), 1);
        assert_eq!(config.rules_for(Path::new("/p/app/main.css")).count(), 0);
    }

    #[test]
    fn detects_content_hash() {
        assert!(sample().uses_content_hash());
    }
}
