//! Check command implementation.
//!
//! Builds the configuration and validates it without running the bundler.

use std::path::Path;

use kiln_config::{validate_fs, EntryPoint};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load settings and the dependency manifest
/// 2. Assemble the configuration for the selected mode
/// 3. Run the shape checks and verify path entries exist on disk
///
/// # Errors
///
/// Returns the first failure; it is also reported on stderr.
pub fn execute(args: CheckArgs, cwd: Option<&Path>) -> Result<()> {
    ui::info("Checking configuration...");

    let project = utils::load_project(cwd)?;
    let env = utils::lifecycle_env(&args.lifecycle);
    let resolved = match utils::resolve(&project, &env) {
        Ok(resolved) => resolved,
        Err(err) => {
            ui::error("Configuration could not be assembled");
            return Err(err);
        }
    };
    ui::success(&format!("Assembled {} configuration", resolved.mode));

    if let Err(err) = validate_fs(&resolved.bundle, &project.root) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    for (name, entry) in &resolved.bundle.entry {
        match entry {
            EntryPoint::Path(path) => ui::success(&format!("  {name}: {}", path.display())),
            EntryPoint::Modules(modules) => {
                ui::success(&format!("  {name}: {} modules", modules.len()))
            }
        }
    }

    ui::success("Configuration is valid!");
    Ok(())
}
