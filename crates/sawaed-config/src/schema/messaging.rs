//! Outbound messaging deep-link settings.

use serde::{Deserialize, Serialize};

/// Where dispatched submissions are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessagingConfig {
    /// Host of the messaging deep-link service.
    pub domain: String,
    /// Phone-style recipient id (international format, digits only).
    pub recipient: String,
    /// Browsing context the link opens in.
    pub target: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            domain: "wa.me".into(),
            recipient: "201012448385".into(),
            target: "_blank".into(),
        }
    }
}
