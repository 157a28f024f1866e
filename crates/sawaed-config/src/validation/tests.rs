//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    assert!(validate(&SiteConfig::default()).is_ok());
}

#[test]
fn catches_non_digit_recipient() {
    let mut config = SiteConfig::default();
    config.messaging.recipient = "+20 101".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("messaging.recipient"));
}

#[test]
fn catches_domain_with_path() {
    let mut config = SiteConfig::default();
    config.messaging.domain = "wa.me/send".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("messaging.domain"));
}

#[test]
fn catches_duplicate_form_names() {
    let mut config = SiteConfig::default();
    config.dispatch.forms.push(DispatchForm::contact());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("is duplicated"));
}

#[test]
fn catches_form_without_fields() {
    let mut config = SiteConfig::default();
    config.dispatch.forms[0].fields.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("dispatch.forms[0].fields"));
}

#[test]
fn catches_duplicate_field_ids() {
    let mut config = SiteConfig::default();
    config.dispatch.forms[1]
        .fields
        .push(DispatchField::optional("contact-name", "again"));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("dispatch.forms[1].fields[5].id"));
}

#[test]
fn catches_overlay_delay_too_long() {
    let mut config = SiteConfig::default();
    config.timing.overlay_delay_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("timing.overlay_delay_ms"));
}

#[test]
fn catches_copy_notice_too_short() {
    let mut config = SiteConfig::default();
    config.timing.copy_notice_ms = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("timing.copy_notice_ms"));
}

#[test]
fn catches_breakpoint_out_of_range() {
    let mut config = SiteConfig::default();
    config.layout.mobile_breakpoint = 100.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.mobile_breakpoint"));
}

#[test]
fn catches_nan_layout_value() {
    let mut config = SiteConfig::default();
    config.layout.header_fallback_height = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.header_fallback_height"));
}

#[test]
fn catches_custom_amount_class_given_as_selector() {
    let mut config = SiteConfig::default();
    config.bindings.custom_amount_class = ".custom-amount".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bindings.custom_amount_class"));
}

#[test]
fn catches_empty_storage_key() {
    let mut config = SiteConfig::default();
    config.storage.category_key = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("storage.category_key"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SiteConfig::default();
    config.messaging.recipient = String::new();
    config.timing.fade_ms = 5_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("messaging.recipient"));
    assert!(err.contains("timing.fade_ms"));
    assert!(err.contains("; "));
}
