//! Project layout settings.
//!
//! Settings are optional: a project following the conventional layout needs
//! no settings file at all. See [`crate::discovery`] for the sources they are
//! loaded from.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSettings {
    /// Application source directory, relative to the project root
    pub app_dir: PathBuf,

    /// Build output directory, relative to the project root
    pub build_dir: PathBuf,

    /// Stylesheet entry point, relative to the project root
    pub style_entry: PathBuf,

    /// Dependency manifest read for the vendor entry
    pub manifest: PathBuf,

    /// Title of the generated HTML shell
    pub html_title: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            build_dir: default_build_dir(),
            style_entry: default_style_entry(),
            manifest: default_manifest(),
            html_title: default_html_title(),
        }
    }
}

impl ProjectSettings {
    /// JSON Schema for `kiln.toml` and the `kiln` field of `package.json`.
    pub fn json_schema() -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(schemars::schema_for!(ProjectSettings))
    }
}

fn default_app_dir() -> PathBuf {
    PathBuf::from("app")
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_style_entry() -> PathBuf {
    PathBuf::from("app/main.css")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_html_title() -> String {
    "Webpack demo".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let settings: ProjectSettings =
            serde_json::from_value(serde_json::json!({ "html_title": "Kanban" })).unwrap();
        assert_eq!(settings.html_title, "Kanban");
        assert_eq!(settings.app_dir, PathBuf::from("app"));
        assert_eq!(settings.style_entry, PathBuf::from("app/main.css"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ProjectSettings, _> =
            serde_json::from_value(serde_json::json!({ "app_directory": "src" }));
        assert!(result.is_err());
    }

    #[test]
    fn schema_lists_every_setting() {
        let schema = ProjectSettings::json_schema().unwrap();
        let props = schema["properties"].as_object().unwrap();
        for key in ["app_dir", "build_dir", "style_entry", "manifest", "html_title"] {
            assert!(props.contains_key(key), "missing {key}");
        }
    }
}
