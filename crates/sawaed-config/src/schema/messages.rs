//! User-facing texts.
//!
//! Defaults are the Arabic strings the site ships with. `{min}` and `{max}`
//! are replaced with the field's declared bounds.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationMessages {
    pub required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub min_value: String,
    pub max_value: String,
}

impl ValidationMessages {
    pub fn min_value_for(&self, min: impl fmt::Display) -> String {
        self.min_value.replace("{min}", &min.to_string())
    }

    pub fn max_value_for(&self, max: impl fmt::Display) -> String {
        self.max_value.replace("{max}", &max.to_string())
    }
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: "هذا الحقل مطلوب".into(),
            invalid_email: "البريد الإلكتروني غير صحيح".into(),
            invalid_phone: "رقم الهاتف غير صحيح (يجب أن يبدأ بـ 01 ويتكون من 11 رقم)".into(),
            min_value: "القيمة يجب أن تكون {min} على الأقل".into(),
            max_value: "القيمة يجب أن تكون {max} كحد أقصى".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessagesConfig {
    pub validation: ValidationMessages,
    pub copy_success: String,
    pub copy_failure: String,
    pub copy_hint: String,
    pub submit_success: String,
    pub back_to_top_label: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMessages::default(),
            copy_success: "تم النسخ!".into(),
            copy_failure: "فشل النسخ".into(),
            copy_hint: "انقر للنسخ".into(),
            submit_success: "تم الإرسال بنجاح! شكراً لك.".into(),
            back_to_top_label: "العودة للأعلى".into(),
        }
    }
}
