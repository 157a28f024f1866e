//! In-page anchor navigation below the fixed header.

use sawaed_common::EventOutcome;
use sawaed_dom::{Bindings, Dom, Role};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    header_fallback: f64,
}

impl SmoothScroll {
    pub fn new(header_fallback: f64) -> Self {
        Self { header_fallback }
    }

    /// Height of the site header; the fallback when it is absent or collapsed.
    pub fn header_height<D: Dom>(&self, dom: &D, bindings: &Bindings) -> f64 {
        bindings
            .resolve(dom, Role::SiteHeader)
            .map(|header| dom.offset_height(&header))
            .filter(|h| *h > 0.0)
            .unwrap_or(self.header_fallback)
    }

    /// Smoothly scrolls so `element` sits just below the header.
    pub fn scroll_to_element<D: Dom>(&self, dom: &mut D, bindings: &Bindings, element: &D::Node) {
        let top = dom.offset_top(element) - self.header_height(dom, bindings);
        dom.scroll_to(top, true);
    }

    /// A bare `#` link is swallowed; `#id` with a live target is scrolled to;
    /// anything else navigates normally.
    pub fn handle_click<D: Dom>(
        &self,
        dom: &mut D,
        bindings: &Bindings,
        target: &D::Node,
    ) -> EventOutcome {
        let Some(anchor) = bindings.closest(dom, target, Role::InPageAnchor) else {
            return EventOutcome::proceed();
        };
        let href = dom.attribute(&anchor, "href").unwrap_or_default();
        let Some(id) = href.strip_prefix('#') else {
            return EventOutcome::proceed();
        };
        if id.is_empty() {
            return EventOutcome::prevent();
        }
        match dom.element_by_id(id) {
            Some(element) => {
                debug!(id, "scrolling to section");
                self.scroll_to_element(dom, bindings, &element);
                EventOutcome::prevent()
            }
            None => EventOutcome::proceed(),
        }
    }
}
