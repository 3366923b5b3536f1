//! Instrument catalog configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where candidates come from when none are passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a TOML instrument catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
