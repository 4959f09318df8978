//! Rules command implementation.
//!
//! Shows which module rules, and so which loader pipelines, a source file
//! goes through.

use std::path::Path;

use crate::cli::RulesArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the rules command.
///
/// Prints one line per matching rule: the test pattern and the loader
/// pipeline. Prints nothing on stdout when no rule applies.
pub fn execute(args: RulesArgs, cwd: Option<&Path>) -> Result<()> {
    let project = utils::load_project(cwd)?;
    let env = utils::lifecycle_env(&args.lifecycle);
    let resolved = utils::resolve(&project, &env)?;

    let file = utils::normalize_path(&utils::resolve_path(&args.file, &project.root));
    let mut matched = 0;
    for rule in resolved.bundle.rules_for(&file) {
        println!("{}\t{}", rule.test.as_str(), rule.pipeline());
        matched += 1;
    }

    if matched == 0 {
        ui::warning(&format!(
            "No rule applies to {} in {} mode",
            file.display(),
            resolved.mode
        ));
    }
    Ok(())
}
