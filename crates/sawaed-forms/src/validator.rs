//! Per-field validation rules.

use std::sync::LazyLock;

use regex::Regex;
use sawaed_config::schema::ValidationMessages;
use serde::Serialize;

use crate::field::{parse_float, Field, FieldKind};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("validator: static email regex must compile")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^01[0-9]{9}$").expect("validator: static phone regex must compile")
});

/// Outcome of validating one field. Never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    /// Empty when valid.
    pub message: String,
}

impl Verdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Loose `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Local mobile number: `01` followed by nine digits, whitespace ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    messages: ValidationMessages,
}

impl FieldValidator {
    pub fn new(messages: ValidationMessages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    /// Applies the rules in order; the first failing rule decides the message.
    ///
    /// Type rules only run on non-empty values, so an empty optional field
    /// is valid whatever its type.
    pub fn validate(&self, field: &Field) -> Verdict {
        let value = field.value.trim();
        let constraints = &field.constraints;

        if value.is_empty() {
            return if constraints.required {
                Verdict::invalid(&self.messages.required)
            } else {
                Verdict::valid()
            };
        }

        match field.kind {
            FieldKind::Email if !is_valid_email(value) => {
                Verdict::invalid(&self.messages.invalid_email)
            }
            FieldKind::Tel if !is_valid_phone(value) => {
                Verdict::invalid(&self.messages.invalid_phone)
            }
            FieldKind::Number => self.check_bounds(field, value),
            _ => Verdict::valid(),
        }
    }

    // The minimum is checked first and wins when both bounds fail.
    // An unparsable value or bound fails no comparison.
    fn check_bounds(&self, field: &Field, value: &str) -> Verdict {
        let Some(number) = parse_float(value) else {
            return Verdict::valid();
        };
        let c = &field.constraints;
        let below = c
            .min
            .as_ref()
            .filter(|b| b.value.is_some_and(|min| number < min));
        let above = c
            .max
            .as_ref()
            .filter(|b| b.value.is_some_and(|max| number > max));

        match (below, above) {
            (Some(min), _) => Verdict::invalid(self.messages.min_value_for(&min.raw)),
            (None, Some(max)) => Verdict::invalid(self.messages.max_value_for(&max.raw)),
            (None, None) => Verdict::valid(),
        }
    }
}
