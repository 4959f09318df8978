//! Kiln CLI - mode-aware bundler configuration.
//!
//! Parses arguments, sets up logging and colors, then dispatches to the
//! selected command.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let cwd = args.cwd;
    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args, cwd.as_deref()),
        cli::Command::Check(check_args) => commands::check_execute(check_args, cwd.as_deref()),
        cli::Command::Rules(rules_args) => commands::rules_execute(rules_args, cwd.as_deref()),
        cli::Command::Env(env_args) => commands::env_execute(env_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    result.map_err(error::cli_error_to_miette)
}
