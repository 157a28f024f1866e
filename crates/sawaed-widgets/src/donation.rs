//! Donation amount, category and frequency selection.
//!
//! Every choice is written to the session store under the configured keys
//! so later pages of the same visit can pick it up.

use sawaed_common::EventOutcome;
use sawaed_config::schema::StorageConfig;
use sawaed_dom::{Bindings, Dom, Role, SessionStore};
use tracing::{info, warn};

use crate::smooth_scroll::SmoothScroll;

const SELECTED: &str = "selected";

#[derive(Debug, Clone)]
pub struct DonationSelector {
    keys: StorageConfig,
}

impl DonationSelector {
    pub fn new(keys: StorageConfig) -> Self {
        Self { keys }
    }

    fn store(&self, store: &mut dyn SessionStore, key: &str, value: &str) {
        if let Err(e) = store.set(key, value) {
            warn!(key, "failed to store selection: {e}");
        }
    }

    /// Amount button click. The custom button reveals the free input; a
    /// preset button hides it and stores its `data-amount`.
    pub fn handle_amount_click<D: Dom>(
        &self,
        dom: &mut D,
        bindings: &Bindings,
        store: &mut dyn SessionStore,
        target: &D::Node,
    ) -> EventOutcome {
        let Some(button) = bindings.closest(dom, target, Role::AmountButton) else {
            return EventOutcome::proceed();
        };
        for other in bindings.resolve_all(dom, Role::AmountButton) {
            dom.remove_class(&other, SELECTED);
        }
        dom.add_class(&button, SELECTED);

        let container = bindings.resolve(dom, Role::CustomAmountContainer);
        let field = bindings.resolve(dom, Role::CustomAmountField);
        if dom.has_class(&button, bindings.custom_amount_class()) {
            if let Some(container) = container {
                dom.set_style(&container, "display", "block");
                if let Some(field) = field {
                    dom.focus(&field);
                }
            }
        } else {
            if let Some(container) = container {
                dom.set_style(&container, "display", "none");
                if let Some(field) = field {
                    dom.set_value(&field, "");
                }
            }
            let amount = dom.attribute(&button, "data-amount").unwrap_or_default();
            self.store(store, &self.keys.amount_key, &amount);
            info!(amount = %amount, "donation amount selected");
        }
        EventOutcome::prevent()
    }

    /// Typing in the custom amount field stores the typed value as-is.
    pub fn handle_custom_input<D: Dom>(
        &self,
        dom: &D,
        bindings: &Bindings,
        store: &mut dyn SessionStore,
        target: &D::Node,
    ) -> bool {
        if !bindings.is(dom, target, Role::CustomAmountField) {
            return false;
        }
        let amount = dom.value(target);
        self.store(store, &self.keys.amount_key, &amount);
        true
    }

    /// Category card click: stores the category (and its amount, if any) and
    /// scrolls to the payment section.
    pub fn handle_category_click<D: Dom>(
        &self,
        dom: &mut D,
        bindings: &Bindings,
        store: &mut dyn SessionStore,
        scroll: &SmoothScroll,
        target: &D::Node,
    ) -> bool {
        let Some(button) = bindings.closest(dom, target, Role::CategoryButton) else {
            return false;
        };
        let category = dom.attribute(&button, "data-category").unwrap_or_default();
        self.store(store, &self.keys.category_key, &category);
        if let Some(amount) = dom
            .attribute(&button, "data-amount")
            .filter(|a| !a.is_empty())
        {
            self.store(store, &self.keys.amount_key, &amount);
        }
        info!(category = %category, "donation category selected");

        if let Some(section) = bindings.resolve(dom, Role::PaymentSection) {
            scroll.scroll_to_element(dom, bindings, &section);
        }
        true
    }

    pub fn handle_frequency_change<D: Dom>(
        &self,
        dom: &D,
        bindings: &Bindings,
        store: &mut dyn SessionStore,
        target: &D::Node,
    ) -> bool {
        if !bindings.is(dom, target, Role::FrequencyOption) {
            return false;
        }
        let frequency = dom.value(target);
        self.store(store, &self.keys.frequency_key, &frequency);
        info!(frequency = %frequency, "donation frequency selected");
        true
    }
}
