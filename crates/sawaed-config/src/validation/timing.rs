//! Timing and layout range checks.

use crate::schema::SiteConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &SiteConfig) {
    let t = &config.timing;
    validate_range(errors, "timing.overlay_delay_ms", t.overlay_delay_ms, 0, 10_000);
    validate_range(
        errors,
        "timing.success_banner_ms",
        t.success_banner_ms,
        500,
        30_000,
    );
    validate_range(errors, "timing.fade_ms", t.fade_ms, 0, 2_000);
    validate_range(errors, "timing.fade_in_delay_ms", t.fade_in_delay_ms, 0, 1_000);
    validate_range(errors, "timing.copy_notice_ms", t.copy_notice_ms, 500, 10_000);
    validate_range(
        errors,
        "timing.scroll_debounce_ms",
        t.scroll_debounce_ms,
        0,
        1_000,
    );
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &SiteConfig) {
    let l = &config.layout;
    validate_range_f64(
        errors,
        "layout.mobile_breakpoint",
        l.mobile_breakpoint,
        320.0,
        2_560.0,
    );
    validate_range_f64(
        errors,
        "layout.header_fallback_height",
        l.header_fallback_height,
        0.0,
        400.0,
    );
    validate_range_f64(
        errors,
        "layout.back_to_top_threshold",
        l.back_to_top_threshold,
        0.0,
        10_000.0,
    );
    validate_range(errors, "layout.reveal_stagger_ms", l.reveal_stagger_ms, 0, 500);
    validate_range(
        errors,
        "layout.reveal_duration_ms",
        l.reveal_duration_ms,
        0,
        2_000,
    );
    validate_range_f64(
        errors,
        "layout.reveal_offset_px",
        l.reveal_offset_px,
        0.0,
        200.0,
    );
}
