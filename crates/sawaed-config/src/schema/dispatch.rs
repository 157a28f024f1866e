//! Forms whose submissions are handed to the messaging deep-link.

use serde::{Deserialize, Serialize};

/// One line of a dispatched message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatchField {
    /// Element id of the input the value is read from.
    pub id: String,
    /// Label printed before the value.
    pub label: String,
    /// Empty optional fields are sent as the placeholder.
    #[serde(default)]
    pub optional: bool,
}

impl DispatchField {
    pub fn required(id: &str, label: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            optional: false,
        }
    }

    pub fn optional(id: &str, label: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            optional: true,
        }
    }
}

/// A form wired to the dispatcher. Field order is the message line order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatchForm {
    pub name: String,
    /// Selector locating the form element.
    pub selector: String,
    /// First line of the message.
    pub intro: String,
    pub fields: Vec<DispatchField>,
}

impl DispatchForm {
    pub fn volunteer() -> Self {
        Self {
            name: "volunteer".into(),
            selector: "#volunteer-form".into(),
            intro: "طلب تطوع جديد:".into(),
            fields: vec![
                DispatchField::required("full-name", "الاسم الكامل"),
                DispatchField::required("age", "العمر"),
                DispatchField::required("phone", "رقم الهاتف"),
                DispatchField::optional("email", "البريد الإلكتروني"),
                DispatchField::required("city", "المحافظة/المدينة"),
                DispatchField::required("field", "المجال المهتم به"),
                DispatchField::required("availability", "الوقت المتاح"),
                DispatchField::optional("experience", "الخبرة السابقة"),
                DispatchField::required("motivation", "الدافع للتطوع"),
                DispatchField::optional("skills", "المهارات الخاصة"),
            ],
        }
    }

    pub fn contact() -> Self {
        Self {
            name: "contact".into(),
            selector: ".contact-form".into(),
            intro: "رسالة جديدة من نموذج الاتصال من الموقع:".into(),
            fields: vec![
                DispatchField::required("contact-name", "الاسم الكامل"),
                DispatchField::required("contact-phone", "رقم الهاتف"),
                DispatchField::optional("contact-email", "البريد الإلكتروني"),
                DispatchField::required("contact-subject", "الموضوع"),
                DispatchField::required("contact-message", "الرسالة"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Value sent for empty optional fields.
    pub placeholder: String,
    pub forms: Vec<DispatchForm>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            placeholder: "-".into(),
            forms: vec![DispatchForm::volunteer(), DispatchForm::contact()],
        }
    }
}
