use std::path::Path;

use super::parsers::{self, ConfigFormat};
use super::raw::RawConfig;
use super::types::ConfigError;

/// Read a configuration file into its raw mapping.
///
/// The format follows the file extension (`.yml`/`.yaml`, `.json`, `.toml`); files without a
/// recognised extension are tried as YAML, then JSON. The path is taken as given: no lookup
/// in parent directories happens here.
pub fn load_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        source: e,
        path: path_str.clone(),
    })?;

    log::debug!("Loading configuration from {path_str}");

    match ConfigFormat::from_path(path) {
        Some(format) => parsers::parse_raw_config(&content, format, &path_str),
        None => parsers::parse_raw_config_any(&content, &path_str),
    }
}
