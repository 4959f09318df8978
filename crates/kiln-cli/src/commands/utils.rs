//! Shared utilities for command implementations.

use std::fs;
use std::path::{Component, Path, PathBuf};

use kiln_config::{resolve_config, LifecycleEnv, Project, ProjectDiscovery, ResolvedConfig};
use serde::Serialize;
use tracing::debug;

use crate::cli::LifecycleArgs;
use crate::error::{CliError, Result, ResultExt};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Clean up `path` without requiring it to exist.
///
/// Existing paths are canonicalized. Others have `.` and `..` components
/// folded lexically.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Find the project root, canonicalized.
///
/// An explicit `--cwd` is used as-is (relative to the current directory).
/// Otherwise the nearest ancestor holding a `package.json` or `kiln.toml`
/// is used.
pub fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    match cwd {
        Some(dir) => {
            let dir = resolve_path(dir, &current);
            let root = fs::canonicalize(&dir).with_path(&dir)?;
            if !root.is_dir() {
                return Err(CliError::InvalidArgument(format!(
                    "--cwd must name a directory, got {}",
                    dir.display()
                )));
            }
            Ok(root)
        }
        None => {
            let current = fs::canonicalize(&current).with_path(&current)?;
            Ok(ProjectDiscovery::from_nearest_root(&current)
                .root()
                .to_path_buf())
        }
    }
}

/// Load settings and manifest for the project.
pub fn load_project(cwd: Option<&Path>) -> Result<Project> {
    let root = project_root(cwd)?;
    debug!(root = %root.display(), "loading project");
    Ok(ProjectDiscovery::new(root).load()?)
}

/// Snapshot the process environment, applying the `--lifecycle` override.
pub fn lifecycle_env(args: &LifecycleArgs) -> LifecycleEnv {
    LifecycleEnv::from_process().with_lifecycle(args.lifecycle.clone())
}

/// Assemble the configuration for a loaded project.
pub fn resolve(project: &Project, env: &LifecycleEnv) -> Result<ResolvedConfig> {
    let resolved = resolve_config(&project.inputs(env))?;
    debug!(mode = %resolved.mode, babel_env = ?resolved.babel_env, "configuration resolved");
    Ok(resolved)
}

/// Serialize `value` as JSON, pretty unless `compact`.
pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize output")
}
