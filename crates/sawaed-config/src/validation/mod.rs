//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod bindings;
mod dispatch;
mod helpers;
mod timing;

#[cfg(test)]
mod tests;

use crate::schema::SiteConfig;
use sawaed_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    dispatch::validate_messaging(&mut errors, config);
    dispatch::validate_dispatch(&mut errors, config);
    timing::validate_timing(&mut errors, config);
    timing::validate_layout(&mut errors, config);
    bindings::validate_bindings(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
