//! TOML-backed configuration loaded from disk at startup.
//!
//! The export rule lists are ordered; handlers replay them in file order.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Rule lists consumed read-only by the handlers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Status transitions replayed after every order creation, in order.
    #[serde(default)]
    pub status: Vec<StatusExportRule>,
    /// Aggregates exported on every source-stock update, in order.
    #[serde(default)]
    pub aggregates: Vec<AggregateExportRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusExportRule {
    pub status: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggregateExportRule {
    pub aggregate: String,
}

fn default_port() -> u16 {
    24213
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
