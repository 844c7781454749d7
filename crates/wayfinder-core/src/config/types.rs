//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// User-level settings for the wayfinder CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayfinderConfig {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Directedness for graph documents that do not say
    #[serde(default)]
    pub default_directed: bool,

    /// Decimal places for distances in human output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Rendering of unreachable distances in human and records output
    #[serde(default = "default_infinity_label")]
    pub infinity_label: String,
}

fn default_precision() -> usize {
    2
}

fn default_infinity_label() -> String {
    "inf".to_string()
}

impl Default for WayfinderConfig {
    fn default() -> Self {
        WayfinderConfig {
            format: OutputFormat::default(),
            default_directed: false,
            precision: default_precision(),
            infinity_label: default_infinity_label(),
        }
    }
}
