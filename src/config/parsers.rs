use serde_json::Value;
use std::path::Path;

use super::raw::RawConfig;
use super::types::ConfigError;

/// Document formats a configuration can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension, if it is a recognised one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yml" | "yaml" => Some(ConfigFormat::Yaml),
            "json" | "jsonc" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Parse a configuration document into its top-level mapping.
///
/// An empty document is an empty configuration. `path` is only used in error messages.
pub(super) fn parse_raw_config(content: &str, format: ConfigFormat, path: &str) -> Result<RawConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }

    let document: Value = match format {
        ConfigFormat::Yaml => serde_yml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("{path}: Failed to parse YAML: {e}")))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("{path}: Failed to parse JSON: {e}")))?,
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("{path}: Failed to parse TOML: {e}")))?,
    };

    RawConfig::try_from(document).map_err(|e| match e {
        ConfigError::ParseError(message) => ConfigError::ParseError(format!("{path}: {message}")),
        other => other,
    })
}

/// Parse a document whose format is unknown: YAML first (a superset of JSON), then JSON.
pub(super) fn parse_raw_config_any(content: &str, path: &str) -> Result<RawConfig, ConfigError> {
    parse_raw_config(content, ConfigFormat::Yaml, path)
        .or_else(|_| parse_raw_config(content, ConfigFormat::Json, path))
        .map_err(|e| ConfigError::ParseError(format!("{path}: Failed to parse config as YAML or JSON ({e})")))
}
