//! Status filter over `[data-status]` items.

use std::time::Duration;

use sawaed_dom::{Bindings, Dom, Role, Scheduler};
use tracing::debug;

pub const SHOW_ALL: &str = "all";
const FADE_TRANSITION: &str = "opacity 0.3s ease";

/// Deferred halves of the fade transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum FadeTask<N> {
    /// Start the fade-in after the initial transparent frame.
    Show { item: N },
    /// Take the item out of layout once it has faded out.
    Hide { item: N },
}

#[derive(Debug, Clone)]
pub struct FilterTabs {
    fade_in_delay: Duration,
    fade: Duration,
}

impl FilterTabs {
    pub fn new(fade_in_delay: Duration, fade: Duration) -> Self {
        Self {
            fade_in_delay,
            fade,
        }
    }

    /// `all` matches everything; any other filter matches items whose
    /// status contains it.
    pub fn matches(filter: &str, status: &str) -> bool {
        filter == SHOW_ALL || status.contains(filter)
    }

    /// Tab click. Returns `false` if `target` is not a filter tab.
    pub fn handle_click<D, T>(
        &self,
        dom: &mut D,
        bindings: &Bindings,
        scheduler: &mut Scheduler<D::Node, T>,
        target: &D::Node,
    ) -> bool
    where
        D: Dom,
        T: From<FadeTask<D::Node>>,
    {
        let Some(tab) = bindings.closest(dom, target, Role::FilterTab) else {
            return false;
        };
        // A tab without a filter shows everything.
        let filter = dom
            .attribute(&tab, "data-filter")
            .unwrap_or_else(|| SHOW_ALL.to_string());
        self.apply(dom, bindings, scheduler, &filter);

        for other in bindings.resolve_all(dom, Role::FilterTab) {
            dom.remove_class(&other, "active");
        }
        dom.add_class(&tab, "active");
        true
    }

    pub fn apply<D, T>(
        &self,
        dom: &mut D,
        bindings: &Bindings,
        scheduler: &mut Scheduler<D::Node, T>,
        filter: &str,
    ) where
        D: Dom,
        T: From<FadeTask<D::Node>>,
    {
        let items = bindings.resolve_all(dom, Role::FilterableItem);
        let mut shown = 0;
        for item in &items {
            // A newer filter supersedes any fade still in flight for this item.
            scheduler.cancel_owned(item);
            let status = dom.attribute(item, "data-status").unwrap_or_default();
            if Self::matches(filter, &status) {
                shown += 1;
                dom.set_styles(item, &[("opacity", "0"), ("display", "")]);
                scheduler.schedule_owned(
                    self.fade_in_delay,
                    item.clone(),
                    FadeTask::Show { item: item.clone() }.into(),
                );
            } else {
                dom.set_styles(item, &[("transition", FADE_TRANSITION), ("opacity", "0")]);
                scheduler.schedule_owned(
                    self.fade,
                    item.clone(),
                    FadeTask::Hide { item: item.clone() }.into(),
                );
            }
        }
        debug!(filter, shown, total = items.len(), "filter applied");
    }

    pub fn run<D: Dom>(&self, dom: &mut D, task: FadeTask<D::Node>) {
        match task {
            FadeTask::Show { item } if dom.is_connected(&item) => {
                dom.set_styles(&item, &[("transition", FADE_TRANSITION), ("opacity", "1")]);
            }
            FadeTask::Hide { item } if dom.is_connected(&item) => {
                dom.set_style(&item, "display", "none");
            }
            _ => {}
        }
    }
}
