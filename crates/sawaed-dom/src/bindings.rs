//! The binding contract between behaviors and page markup.
//!
//! Each [`Role`] names one kind of element a behavior attaches to; the
//! configured selector says how the page exposes it. Behaviors resolve
//! roles through [`Bindings`] instead of hard-coding selectors.

use std::fmt;

use sawaed_config::schema::BindingsConfig;
use tracing::{debug, warn};

use crate::dom::Dom;
use crate::selector::SelectorList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    MenuToggle,
    NavMenu,
    SiteHeader,
    InPageAnchor,
    Form,
    FormField,
    RequiredField,
    AmountButton,
    CustomAmountContainer,
    CustomAmountField,
    CategoryButton,
    PaymentSection,
    FrequencyOption,
    FilterTab,
    FilterableItem,
    Copyable,
    AnimatedCard,
}

impl Role {
    pub const ALL: [Role; 17] = [
        Role::MenuToggle,
        Role::NavMenu,
        Role::SiteHeader,
        Role::InPageAnchor,
        Role::Form,
        Role::FormField,
        Role::RequiredField,
        Role::AmountButton,
        Role::CustomAmountContainer,
        Role::CustomAmountField,
        Role::CategoryButton,
        Role::PaymentSection,
        Role::FrequencyOption,
        Role::FilterTab,
        Role::FilterableItem,
        Role::Copyable,
        Role::AnimatedCard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::MenuToggle => "menu_toggle",
            Role::NavMenu => "nav_menu",
            Role::SiteHeader => "site_header",
            Role::InPageAnchor => "in_page_anchor",
            Role::Form => "form",
            Role::FormField => "form_field",
            Role::RequiredField => "required_field",
            Role::AmountButton => "amount_button",
            Role::CustomAmountContainer => "custom_amount_container",
            Role::CustomAmountField => "custom_amount_field",
            Role::CategoryButton => "category_button",
            Role::PaymentSection => "payment_section",
            Role::FrequencyOption => "frequency_option",
            Role::FilterTab => "filter_tab",
            Role::FilterableItem => "filterable_item",
            Role::Copyable => "copyable",
            Role::AnimatedCard => "animated_card",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which roles the current page satisfies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingReport {
    pub bound: Vec<Role>,
    pub unbound: Vec<Role>,
    /// Roles whose selector failed to parse.
    pub invalid: Vec<Role>,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    config: BindingsConfig,
}

impl Bindings {
    pub fn from_config(config: &BindingsConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn selector(&self, role: Role) -> &str {
        let c = &self.config;
        match role {
            Role::MenuToggle => &c.menu_toggle,
            Role::NavMenu => &c.nav_menu,
            Role::SiteHeader => &c.site_header,
            Role::InPageAnchor => &c.in_page_anchor,
            Role::Form => &c.form,
            Role::FormField => &c.form_field,
            Role::RequiredField => &c.required_field,
            Role::AmountButton => &c.amount_button,
            Role::CustomAmountContainer => &c.custom_amount_container,
            Role::CustomAmountField => &c.custom_amount_field,
            Role::CategoryButton => &c.category_button,
            Role::PaymentSection => &c.payment_section,
            Role::FrequencyOption => &c.frequency_option,
            Role::FilterTab => &c.filter_tab,
            Role::FilterableItem => &c.filterable_item,
            Role::Copyable => &c.copyable,
            Role::AnimatedCard => &c.animated_card,
        }
    }

    /// Class carried by the amount button that opens the custom amount input.
    pub fn custom_amount_class(&self) -> &str {
        &self.config.custom_amount_class
    }

    pub fn resolve<D: Dom>(&self, dom: &D, role: Role) -> Option<D::Node> {
        dom.query(self.selector(role))
    }

    pub fn resolve_all<D: Dom>(&self, dom: &D, role: Role) -> Vec<D::Node> {
        dom.query_all(self.selector(role))
    }

    pub fn resolve_within<D: Dom>(&self, dom: &D, root: &D::Node, role: Role) -> Vec<D::Node> {
        dom.query_within(root, self.selector(role))
    }

    pub fn is<D: Dom>(&self, dom: &D, node: &D::Node, role: Role) -> bool {
        dom.matches(node, self.selector(role))
    }

    /// Nearest inclusive ancestor of `node` playing `role`.
    pub fn closest<D: Dom>(&self, dom: &D, node: &D::Node, role: Role) -> Option<D::Node> {
        dom.closest(node, self.selector(role))
    }

    /// Checks every role against the page and logs the outcome.
    ///
    /// Unbound roles are normal (not every page has every widget); invalid
    /// selectors are configuration mistakes and are logged as warnings.
    pub fn check<D: Dom>(&self, dom: &D) -> BindingReport {
        let mut report = BindingReport::default();
        for role in Role::ALL {
            let selector = self.selector(role);
            if let Err(e) = SelectorList::parse(selector) {
                warn!(%role, selector, "invalid binding selector: {e}");
                report.invalid.push(role);
            } else if dom.query(selector).is_some() {
                report.bound.push(role);
            } else {
                debug!(%role, selector, "no element on this page");
                report.unbound.push(role);
            }
        }
        report
    }
}
