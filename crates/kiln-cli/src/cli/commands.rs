//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the final bundler configuration as JSON
    ///
    /// The configuration is written to stdout so it can be piped straight
    /// into the bundler. Logs and status messages go to stderr.
    Print(PrintArgs),

    /// Build the configuration and validate it against the project
    ///
    /// Runs the shape checks (entries, script rule, filename patterns) and
    /// verifies that every path entry exists on disk.
    Check(CheckArgs),

    /// List the module rules that apply to a source file
    Rules(RulesArgs),

    /// Show the mode and BABEL_ENV value for a lifecycle token
    Env(EnvArgs),

    /// Print the JSON schema of the project settings
    Schema(SchemaArgs),
}

/// Lifecycle selection shared by every config-producing command
#[derive(Args, Debug, Clone, Default)]
pub struct LifecycleArgs {
    /// Lifecycle token to build for (`start`, `build` or `stats`)
    ///
    /// Overrides the npm_lifecycle_event environment variable. With neither
    /// set, the development configuration is produced.
    #[arg(short, long, value_name = "TOKEN")]
    pub lifecycle: Option<String>,
}

/// Arguments for `kiln print`
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub lifecycle: LifecycleArgs,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `kiln check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub lifecycle: LifecycleArgs,
}

/// Arguments for `kiln rules`
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Source file to match, relative to the project directory
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub lifecycle: LifecycleArgs,
}

/// Arguments for `kiln env`
#[derive(Args, Debug)]
pub struct EnvArgs {
    #[command(flatten)]
    pub lifecycle: LifecycleArgs,

    /// Print as a JSON object instead of KEY=value lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `kiln schema`
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}
