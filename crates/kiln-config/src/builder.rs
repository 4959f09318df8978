//! Assembly of the final configuration from base and mode overlay.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::bundle::{
    BundleConfig, CompressOptions, DevServer, Devtool, EntryPoint, FileMatcher, Loader,
    ModuleOptions, ModuleRule, OutputOptions, Plugin, ResolveOptions,
};
use crate::env::LifecycleEnv;
use crate::error::Result;
use crate::manifest::DependencyManifest;
use crate::merge::{Overlay, OutputOverlay};
use crate::mode::Mode;
use crate::paths::PathTable;
use crate::settings::ProjectSettings;

/// Entry name of the vendor bundle in production.
pub const VENDOR_ENTRY: &str = "vendor";
/// Chunk receiving the bundler runtime in production.
pub const MANIFEST_CHUNK: &str = "manifest";

/// Everything the configuration depends on, gathered up front.
#[derive(Debug, Clone, Copy)]
pub struct ConfigInputs<'a> {
    pub env: &'a LifecycleEnv,
    pub manifest: &'a DependencyManifest,
    pub paths: &'a PathTable,
    pub settings: &'a ProjectSettings,
}

/// Final configuration together with the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub mode: Mode,

    /// Value to export as `BABEL_ENV` for the script transform: the
    /// lifecycle token, if there was one
    pub babel_env: Option<String>,

    pub bundle: BundleConfig,
}

/// Shared skeleton every mode builds on.
pub fn base_config(paths: &PathTable, settings: &ProjectSettings) -> BundleConfig {
    let mut entry = IndexMap::new();
    entry.insert("app".to_string(), EntryPoint::Path(paths.app().to_path_buf()));
    entry.insert("style".to_string(), EntryPoint::Path(paths.style().to_path_buf()));

    BundleConfig {
        entry,
        output: OutputOptions {
            path: paths.build().to_path_buf(),
            filename: "[name].js".to_string(),
            chunk_filename: None,
        },
        resolve: ResolveOptions::default(),
        module: ModuleOptions {
            // Scripts outside the app directory (node_modules) are left alone.
            rules: vec![ModuleRule::new(
                FileMatcher::scripts(),
                vec![Loader::Babel {
                    cache_directory: true,
                }],
                paths.app(),
            )],
        },
        plugins: vec![Plugin::HtmlShell {
            title: settings.html_title.clone(),
        }],
        devtool: None,
        dev_server: None,
    }
}

/// Dev server, runtime style injection, hot replacement and auto-install.
pub fn development_overlay(paths: &PathTable, env: &LifecycleEnv) -> Result<Overlay> {
    let dev_server = DevServer {
        host: env.host.clone(),
        port: env.parsed_port()?,
        ..DevServer::default()
    };
    debug!(host = ?dev_server.host, port = ?dev_server.port, "dev server binding");

    Ok(Overlay {
        devtool: Some(Devtool::EvalSourceMap),
        dev_server: Some(dev_server),
        rules: vec![ModuleRule::new(
            FileMatcher::stylesheets(),
            vec![Loader::Style, Loader::Css],
            paths.app(),
        )],
        plugins: vec![
            Plugin::HotModuleReplacement,
            Plugin::AutoInstall { save: true },
        ],
        ..Overlay::default()
    })
}

/// Vendor splitting, hashed filenames, CSS extraction and minification.
pub fn production_overlay(paths: &PathTable, manifest: &DependencyManifest) -> Result<Overlay> {
    let vendor = manifest.vendor_modules()?;
    if vendor.is_empty() {
        warn!(
            manifest = %manifest.path().display(),
            "no runtime dependencies, vendor bundle will be empty"
        );
    }
    debug!(modules = vendor.len(), "vendor entry");

    let mut entry = IndexMap::new();
    entry.insert(VENDOR_ENTRY.to_string(), EntryPoint::Modules(vendor));

    Ok(Overlay {
        entry,
        output: OutputOverlay {
            path: Some(paths.build().to_path_buf()),
            filename: Some("[name].[chunkhash].js".to_string()),
            chunk_filename: Some("[chunkhash].js".to_string()),
        },
        rules: vec![ModuleRule::new(
            FileMatcher::stylesheets(),
            vec![
                Loader::ExtractCss {
                    fallback: Box::new(Loader::Style),
                },
                Loader::Css,
            ],
            paths.app(),
        )],
        plugins: vec![
            Plugin::ExtractCss {
                filename: "[name].[chunkhash].css".to_string(),
            },
            Plugin::CleanOutput {
                paths: vec![paths.build().to_path_buf()],
            },
            Plugin::CommonsChunk {
                names: vec![VENDOR_ENTRY.to_string(), MANIFEST_CHUNK.to_string()],
            },
            Plugin::node_env("production"),
            Plugin::Minify {
                compress: CompressOptions { warnings: false },
            },
        ],
        ..Overlay::default()
    })
}

/// Build the final configuration for an explicit mode.
pub fn build_config(mode: Mode, inputs: &ConfigInputs<'_>) -> Result<BundleConfig> {
    let base = base_config(inputs.paths, inputs.settings);
    let overlay = match mode {
        Mode::Development => development_overlay(inputs.paths, inputs.env)?,
        Mode::Production => production_overlay(inputs.paths, inputs.manifest)?,
    };
    debug!(%mode, rules = overlay.rules.len(), plugins = overlay.plugins.len(), "applying overlay");
    Ok(base.merge(&overlay))
}

/// Select the mode from the lifecycle token in `inputs.env`, then build.
///
/// # Errors
///
/// `ConfigError::UnknownMode` for lifecycle tokens outside the known set,
/// plus any error from the selected overlay.
pub fn resolve_config(inputs: &ConfigInputs<'_>) -> Result<ResolvedConfig> {
    let lifecycle = inputs.env.lifecycle.as_deref();
    let mode = Mode::from_lifecycle(lifecycle)?;
    debug!(lifecycle = ?lifecycle, %mode, "selected mode");

    Ok(ResolvedConfig {
        mode,
        babel_env: inputs.env.lifecycle.clone(),
        bundle: build_config(mode, inputs)?,
    })
}
