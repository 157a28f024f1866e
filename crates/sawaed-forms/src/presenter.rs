//! Inline error feedback next to a field.

use sawaed_dom::Dom;

use crate::validator::Verdict;

pub const ERROR_CLASS: &str = "error";
pub const MESSAGE_CLASS: &str = "error-message";

const MESSAGE_STYLE: &[(&str, &str)] = &[
    ("color", "#f44336"),
    ("font-size", "0.85rem"),
    ("margin-top", "0.25rem"),
    ("display", "block"),
];

/// Keeps at most one `.error-message` element directly after each field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPresenter;

impl ErrorPresenter {
    pub fn new() -> Self {
        Self
    }

    /// The feedback element currently attached to `field`, if any.
    pub fn message_for<D: Dom>(&self, dom: &D, field: &D::Node) -> Option<D::Node> {
        dom.next_sibling(field)
            .filter(|next| dom.has_class(next, MESSAGE_CLASS))
    }

    pub fn show<D: Dom>(&self, dom: &mut D, field: &D::Node, message: &str) {
        dom.add_class(field, ERROR_CLASS);
        let element = match self.message_for(dom, field) {
            Some(existing) => existing,
            None => {
                let span = dom.create_element("span");
                dom.add_class(&span, MESSAGE_CLASS);
                dom.set_styles(&span, MESSAGE_STYLE);
                dom.insert_after(field, &span);
                span
            }
        };
        dom.set_text_content(&element, message);
        dom.set_attribute(field, "aria-invalid", "true");
    }

    pub fn clear<D: Dom>(&self, dom: &mut D, field: &D::Node) {
        dom.remove_class(field, ERROR_CLASS);
        if let Some(element) = self.message_for(dom, field) {
            dom.remove(&element);
        }
        dom.remove_attribute(field, "aria-invalid");
    }

    pub fn present<D: Dom>(&self, dom: &mut D, field: &D::Node, verdict: &Verdict) {
        if verdict.valid {
            self.clear(dom, field);
        } else {
            self.show(dom, field, &verdict.message);
        }
    }
}
