//! Page binding contract: which markup each behavior attaches to.
//!
//! Every entry is a CSS selector (comma groups allowed). The page must
//! expose matching elements for the behavior to activate; a missing match
//! disables that behavior only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BindingsConfig {
    pub menu_toggle: String,
    pub nav_menu: String,
    pub site_header: String,
    pub in_page_anchor: String,
    pub form: String,
    pub form_field: String,
    pub required_field: String,
    pub amount_button: String,
    /// Class that marks the amount button opening the custom amount input.
    pub custom_amount_class: String,
    pub custom_amount_container: String,
    pub custom_amount_field: String,
    pub category_button: String,
    pub payment_section: String,
    pub frequency_option: String,
    pub filter_tab: String,
    pub filterable_item: String,
    pub copyable: String,
    pub animated_card: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            menu_toggle: ".menu-toggle".into(),
            nav_menu: ".nav-menu".into(),
            site_header: ".site-header".into(),
            in_page_anchor: "a[href^=\"#\"]".into(),
            form: "form".into(),
            form_field: "input, textarea, select".into(),
            required_field: "input[required], textarea[required], select[required]".into(),
            amount_button: ".amount-btn".into(),
            custom_amount_class: "custom-amount".into(),
            custom_amount_container: ".custom-amount-input".into(),
            custom_amount_field: "#custom-donation-amount".into(),
            category_button: ".select-category".into(),
            payment_section: ".payment-methods".into(),
            frequency_option: "input[name=\"donation-frequency\"]".into(),
            filter_tab: ".filter-tab".into(),
            filterable_item: "[data-status]".into(),
            copyable: ".account-number, .phone-number".into(),
            animated_card: ".stat-card, .activity-card, .project-card, .testimonial-card, \
                            .goal-card, .value-card, .opportunity-card, .category-card, \
                            .benefit-card, .cta-option"
                .into(),
        }
    }
}
