//! Env command implementation.
//!
//! Reports what the lifecycle token selects: the mode, and the value the
//! script transform should see as `BABEL_ENV`.

use kiln_config::{LifecycleEnv, Mode};
use serde::Serialize;

use crate::cli::EnvArgs;
use crate::commands::utils;
use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvReport {
    mode: Mode,
    babel_env: Option<String>,
    host: Option<String>,
    port: Option<u16>,
}

impl EnvReport {
    fn from_env(env: &LifecycleEnv) -> Result<Self> {
        let mode = Mode::from_lifecycle(env.lifecycle.as_deref())?;
        // The dev server is the only consumer of HOST and PORT.
        let (host, port) = if mode.is_production() {
            (None, None)
        } else {
            (env.host.clone(), env.parsed_port()?)
        };
        Ok(Self {
            mode,
            babel_env: env.lifecycle.clone(),
            host,
            port,
        })
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("MODE={}", self.mode)];
        if let Some(babel_env) = &self.babel_env {
            lines.push(format!("BABEL_ENV={babel_env}"));
        }
        if let Some(host) = &self.host {
            lines.push(format!("HOST={host}"));
        }
        if let Some(port) = self.port {
            lines.push(format!("PORT={port}"));
        }
        lines
    }
}

/// Execute the env command.
///
/// Needs no project: only the environment is consulted.
pub fn execute(args: EnvArgs) -> Result<()> {
    let env = utils::lifecycle_env(&args.lifecycle);
    let report = EnvReport::from_env(&env)?;

    if args.json {
        println!("{}", utils::to_json(&report, false)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}
