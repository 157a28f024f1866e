//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `sawaed=debug`.
    pub directive: String,
    /// Log page visibility and connectivity changes.
    pub lifecycle_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directive: "sawaed=info".into(),
            lifecycle_events: true,
        }
    }
}
