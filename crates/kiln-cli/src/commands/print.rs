//! Print command implementation.
//!
//! Writes the final bundler configuration to stdout.

use std::path::Path;

use tracing::info;

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the print command.
///
/// # Errors
///
/// Fails when the project cannot be loaded, the lifecycle token is unknown
/// or the production overlay cannot read the dependency list.
pub fn execute(args: PrintArgs, cwd: Option<&Path>) -> Result<()> {
    let project = utils::load_project(cwd)?;
    let env = utils::lifecycle_env(&args.lifecycle);
    let resolved = utils::resolve(&project, &env)?;

    info!(mode = %resolved.mode, "printing configuration");
    println!("{}", utils::to_json(&resolved.bundle, args.compact)?);
    Ok(())
}
