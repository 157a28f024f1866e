//! Hands a submitted form to the messaging deep-link.
//!
//! The link is `https://{domain}/{recipient}?text={encoded}` where the text
//! is the form's intro line followed by one `{label}: {value}` line per
//! configured field, newline-joined and percent-encoded (so `\n` is `%0A`).

use sawaed_common::new_correlation_id;
use sawaed_config::schema::{DispatchConfig, DispatchForm, MessagingConfig};
use sawaed_dom::Dom;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadLine {
    pub label: String,
    pub value: String,
}

/// Field values of one form, in the form's fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub form: String,
    pub intro: String,
    pub lines: Vec<PayloadLine>,
}

impl SubmissionPayload {
    /// Reads every configured field by element id.
    ///
    /// Values are taken as typed. Empty optional fields become `placeholder`;
    /// a missing element reads as empty.
    pub fn collect<D: Dom>(dom: &D, form: &DispatchForm, placeholder: &str) -> Self {
        let lines = form
            .fields
            .iter()
            .map(|field| {
                let value = match dom.element_by_id(&field.id) {
                    Some(node) => dom.value(&node),
                    None => {
                        warn!(form = %form.name, field = %field.id, "dispatch field not found");
                        String::new()
                    }
                };
                let value = if field.optional && value.is_empty() {
                    placeholder.to_string()
                } else {
                    value
                };
                PayloadLine {
                    label: field.label.clone(),
                    value,
                }
            })
            .collect();
        Self {
            form: form.name.clone(),
            intro: form.intro.clone(),
            lines,
        }
    }

    /// The human-readable message, before encoding.
    pub fn text(&self) -> String {
        let mut text = self.intro.clone();
        for line in &self.lines {
            text.push('\n');
            text.push_str(&line.label);
            text.push_str(": ");
            text.push_str(&line.value);
        }
        text
    }

    pub fn deep_link(&self, messaging: &MessagingConfig) -> String {
        format!(
            "https://{}/{}?text={}",
            messaging.domain,
            messaging.recipient,
            urlencoding::encode(&self.text())
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    messaging: MessagingConfig,
    dispatch: DispatchConfig,
}

impl Dispatcher {
    pub fn new(messaging: MessagingConfig, dispatch: DispatchConfig) -> Self {
        Self {
            messaging,
            dispatch,
        }
    }

    pub fn forms(&self) -> &[DispatchForm] {
        &self.dispatch.forms
    }

    /// The dispatch definition `form` matches, if it is a dispatch form.
    pub fn form_for<D: Dom>(&self, dom: &D, form: &D::Node) -> Option<&DispatchForm> {
        self.dispatch
            .forms
            .iter()
            .find(|f| dom.matches(form, &f.selector))
    }

    /// Collects the payload and opens the deep-link.
    pub fn dispatch<D: Dom>(&self, dom: &mut D, form: &DispatchForm) -> SubmissionPayload {
        let payload = SubmissionPayload::collect(dom, form, &self.dispatch.placeholder);
        let url = payload.deep_link(&self.messaging);
        let id = new_correlation_id();
        info!(
            id = %id,
            form = %form.name,
            fields = payload.lines.len(),
            "opening messaging deep-link"
        );
        dom.open_window(&url, &self.messaging.target);
        payload
    }
}
