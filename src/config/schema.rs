use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a profile is printed.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

/// CLI configuration.
///
/// Example YAML:
/// ```yaml
/// catalog: ~/quiz/catalog.yaml
/// format: table
/// colors: true
/// log_level: info
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Question catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default output format for scored profiles
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Force colors on or off (default: on when stdout is a terminal)
    #[serde(default)]
    pub colors: Option<bool>,

    /// Log filter used when RUST_LOG is not set, e.g. "info" or "weight_profile=debug"
    #[serde(default)]
    pub log_level: Option<String>,
}
