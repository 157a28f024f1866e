//! Layout thresholds the widgets react to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width at or below which the navigation behaves as a mobile menu.
    pub mobile_breakpoint: f64,
    /// Header height used for scroll offsets when the header has no height.
    pub header_fallback_height: f64,
    /// Scroll offset after which the back-to-top button appears.
    pub back_to_top_threshold: f64,
    /// Per-card delay added to reveal transitions, in milliseconds.
    pub reveal_stagger_ms: u64,
    /// Duration of reveal transitions, in milliseconds.
    pub reveal_duration_ms: u64,
    /// Distance hidden cards are shifted down before they are revealed.
    pub reveal_offset_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            header_fallback_height: 80.0,
            back_to_top_threshold: 300.0,
            reveal_stagger_ms: 40,
            reveal_duration_ms: 300,
            reveal_offset_px: 15.0,
        }
    }
}
