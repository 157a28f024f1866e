//! Site configuration.
//!
//! TOML-based configuration for the interactive behaviors of the site:
//! the messaging endpoint, dispatched forms, timings, texts, session keys
//! and the page binding table. All sections use defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust
//! use sawaed_config::{load_from_str, SiteConfig};
//!
//! let config = load_from_str("[messaging]\nrecipient = \"201000000000\"").unwrap();
//! assert_eq!(config.messaging.domain, SiteConfig::default().messaging.domain);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SiteConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{create_default_config, load_from_path, load_from_str};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SiteConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
