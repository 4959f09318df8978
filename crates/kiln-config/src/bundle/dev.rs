//! Development server settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServer {
    /// Serve the HTML shell for unknown paths so client-side routing works
    pub history_api_fallback: bool,

    /// Hot module swapping
    pub hot: bool,

    /// Embed the live-reload client in the bundle
    pub inline: bool,

    /// Report build progress
    pub progress: bool,

    /// Console output preset
    pub stats: StatsPreset,

    /// Bind host. `None` leaves the bundler's own default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Bind port. `None` leaves the bundler's own default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Default for DevServer {
    fn default() -> Self {
        Self {
            history_api_fallback: true,
            hot: true,
            inline: true,
            progress: true,
            stats: StatsPreset::ErrorsOnly,
            host: None,
            port: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsPreset {
    /// Only errors are printed
    #[default]
    ErrorsOnly,
}

/// Source map style used while developing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// Each module is evaluated with an inline source map (slow first build,
    /// fast rebuilds)
    #[default]
    EvalSourceMap,
}
