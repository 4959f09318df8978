//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln print` - Print the final bundler configuration as JSON
//! - `kiln check` - Build and validate the configuration against the project
//! - `kiln rules` - Show which module rules apply to a source file
//! - `kiln env` - Show the mode and transform environment for a lifecycle
//! - `kiln schema` - Print the JSON schema of the project settings

mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{
    CheckArgs, Command, EnvArgs, LifecycleArgs, PrintArgs, RulesArgs, SchemaArgs,
};

/// Kiln - mode-aware configuration for a front-end bundler
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Mode-aware configuration for a front-end module bundler",
    long_about = "Kiln assembles the bundler configuration for a project from a shared base\n\
                  and a development or production overlay, chosen by the package script\n\
                  being run (npm_lifecycle_event). The result is printed as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows mode selection, overlay assembly and the settings that were
    /// loaded for the project.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory (defaults to the nearest directory holding a
    /// package.json or kiln.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
