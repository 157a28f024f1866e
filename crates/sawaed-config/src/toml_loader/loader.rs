//! Core TOML config loading: from a string (embedded or fetched by the host)
//! or from a file on disk.

use crate::schema::SiteConfig;
use crate::validation;
use sawaed_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Parse and validate config from TOML text.
///
/// Missing fields take their defaults; a config that parses but fails
/// validation is rejected with every problem listed.
pub fn load_from_str(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}
