//! Schema command implementation.

use kiln_config::ProjectSettings;

use crate::cli::SchemaArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print the JSON schema of `kiln.toml` / the `kiln` manifest field.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = ProjectSettings::json_schema()?;
    println!("{}", utils::to_json(&schema, args.compact)?);
    Ok(())
}
