//! Delays for deferred UI work, in milliseconds.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// How long the busy overlay stays up after a submit (valid range: 0-10000).
    pub overlay_delay_ms: u64,
    /// Lifetime of the post-submit success banner (valid range: 500-30000).
    pub success_banner_ms: u64,
    /// Length of opacity transitions before an element is hidden or removed.
    pub fade_ms: u64,
    /// Delay before a freshly shown element starts fading in.
    pub fade_in_delay_ms: u64,
    /// Lifetime of a copy-to-clipboard notice (valid range: 500-10000).
    pub copy_notice_ms: u64,
    /// Quiet window for scroll-triggered reveal checks.
    pub scroll_debounce_ms: u64,
}

impl TimingConfig {
    pub fn overlay_delay(&self) -> Duration {
        Duration::from_millis(self.overlay_delay_ms)
    }

    pub fn success_banner(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn copy_notice(&self) -> Duration {
        Duration::from_millis(self.copy_notice_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            overlay_delay_ms: 1500,
            success_banner_ms: 5000,
            fade_ms: 300,
            fade_in_delay_ms: 10,
            copy_notice_ms: 2000,
            scroll_debounce_ms: 20,
        }
    }
}
