//! Binding table checks. Selectors are only checked for presence here;
//! syntax is checked where they are parsed.

use crate::schema::SiteConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_bindings(errors: &mut Vec<String>, config: &SiteConfig) {
    let b = &config.bindings;
    let entries = [
        ("bindings.menu_toggle", &b.menu_toggle),
        ("bindings.nav_menu", &b.nav_menu),
        ("bindings.form", &b.form),
        ("bindings.form_field", &b.form_field),
        ("bindings.required_field", &b.required_field),
        ("bindings.custom_amount_class", &b.custom_amount_class),
    ];
    for (name, value) in entries {
        validate_non_empty(errors, name, value);
    }
    if b.custom_amount_class.starts_with('.') {
        errors.push(format!(
            "bindings.custom_amount_class = {:?} must be a class name, not a selector",
            b.custom_amount_class
        ));
    }
    let storage = &config.storage;
    validate_non_empty(errors, "storage.amount_key", &storage.amount_key);
    validate_non_empty(errors, "storage.category_key", &storage.category_key);
    validate_non_empty(errors, "storage.frequency_key", &storage.frequency_key);
}
