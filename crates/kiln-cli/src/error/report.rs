//! Conversion from CLI errors to miette reports.

use kiln_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert a `CliError` into a miette report, attaching a hint when the
/// failure has an obvious fix.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => match config_hint(&e) {
            Some(hint) => miette::miette!(help = hint, "Configuration error: {}", e),
            None => miette::miette!("Configuration error: {}", e),
        },
        CliError::FileNotFound(ref path) => miette::miette!(
            help = "Paths are resolved against the project directory (see --cwd)",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_hint(err: &ConfigError) -> Option<&'static str> {
    let hint = match err {
        ConfigError::UnknownMode(_) => {
            "Run through `npm start`, `npm run build` or `npm run stats`, or pass --lifecycle"
        }
        ConfigError::InvalidPort { .. } => "Set PORT to a number, or unset it",
        ConfigError::ManifestNotFound(_) => {
            "Run inside a project with a package.json, or set `manifest` in kiln.toml"
        }
        ConfigError::ManifestParse { .. } => "Check package.json for JSON syntax errors",
        ConfigError::MissingDependencies(_) => {
            "Production builds split every dependency into a vendor chunk; add a \"dependencies\" object"
        }
        ConfigError::EntryNotFound(_) => {
            "Create the file or adjust `app_dir` / `style_entry` in kiln.toml"
        }
        ConfigError::EmptyEntry(_) => "Add at least one runtime dependency to package.json",
        ConfigError::Settings(_) => {
            "Valid settings are app_dir, build_dir, style_entry, manifest and html_title (see `kiln schema`)"
        }
        _ => return None,
    };
    Some(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_mode_has_hint() {
        let report = cli_error_to_miette(ConfigError::UnknownMode("test".into()).into());
        assert!(report.to_string().contains("unknown lifecycle event 'test'"));
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--lifecycle"));
    }

    #[test]
    fn test_schema_errors_have_no_hint() {
        let report = cli_error_to_miette(ConfigError::MissingScriptRule.into());
        assert!(report.help().is_none());
    }

    #[test]
    fn test_file_not_found_mentions_path() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("app/x.js")));
        assert!(report.to_string().contains("app/x.js"));
    }
}
