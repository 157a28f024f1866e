//! Messaging endpoint and dispatched form checks.

use std::collections::HashSet;

use crate::schema::SiteConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_messaging(errors: &mut Vec<String>, config: &SiteConfig) {
    let m = &config.messaging;
    validate_non_empty(errors, "messaging.domain", &m.domain);
    if m.domain.contains('/') || m.domain.contains(char::is_whitespace) {
        errors.push(format!(
            "messaging.domain = {:?} must be a bare host name",
            m.domain
        ));
    }
    if m.recipient.is_empty() || !m.recipient.chars().all(|c| c.is_ascii_digit()) {
        errors.push(format!(
            "messaging.recipient = {:?} must contain digits only",
            m.recipient
        ));
    }
    validate_non_empty(errors, "messaging.target", &m.target);
}

pub(crate) fn validate_dispatch(errors: &mut Vec<String>, config: &SiteConfig) {
    let mut names = HashSet::new();
    for (i, form) in config.dispatch.forms.iter().enumerate() {
        let prefix = format!("dispatch.forms[{i}]");
        validate_non_empty(errors, &format!("{prefix}.name"), &form.name);
        validate_non_empty(errors, &format!("{prefix}.selector"), &form.selector);
        if !names.insert(form.name.as_str()) {
            errors.push(format!("{prefix}.name = {:?} is duplicated", form.name));
        }
        if form.fields.is_empty() {
            errors.push(format!("{prefix}.fields must not be empty"));
        }
        let mut ids = HashSet::new();
        for (j, field) in form.fields.iter().enumerate() {
            validate_non_empty(errors, &format!("{prefix}.fields[{j}].id"), &field.id);
            if !ids.insert(field.id.as_str()) {
                errors.push(format!(
                    "{prefix}.fields[{j}].id = {:?} is duplicated",
                    field.id
                ));
            }
        }
    }
}
