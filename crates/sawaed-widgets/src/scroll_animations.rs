//! Fade-in of cards as they scroll into view.
//!
//! On mount, cards already visible are shown immediately; the rest are made
//! transparent, shifted down and tagged `data-animate`. A check on the next
//! animation frame, and a debounced check after scrolling, reveal tagged
//! cards that have come fully into view.

use std::time::Duration;

use sawaed_config::schema::LayoutConfig;
use sawaed_dom::{Bindings, Dom, Role, Scheduler};
use tracing::debug;

use crate::utils::{is_in_viewport, Debouncer};

const ANIMATE_ATTR: &str = "data-animate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTask {
    Check,
}

#[derive(Debug)]
pub struct ScrollAnimations<N> {
    stagger_ms: u64,
    duration_ms: u64,
    offset_px: f64,
    cards: Vec<N>,
    enabled: bool,
    frame_pending: bool,
    debounce: Debouncer,
}

impl<N: Clone + PartialEq> ScrollAnimations<N> {
    pub fn new(layout: &LayoutConfig, debounce: Duration) -> Self {
        Self {
            stagger_ms: layout.reveal_stagger_ms,
            duration_ms: layout.reveal_duration_ms,
            offset_px: layout.reveal_offset_px,
            cards: Vec::new(),
            enabled: false,
            frame_pending: false,
            debounce: Debouncer::new(debounce),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mount<D: Dom<Node = N>>(&mut self, dom: &mut D, bindings: &Bindings) {
        if dom.prefers_reduced_motion() {
            debug!("reduced motion preferred, scroll animations off");
            return;
        }
        self.cards = bindings.resolve_all(dom, Role::AnimatedCard);
        if self.cards.is_empty() {
            return;
        }
        let transition = format!(
            "opacity {d}ms ease, transform {d}ms ease",
            d = self.duration_ms
        );
        let hidden_transform = format!("translateY({}px)", self.offset_px);
        let mut deferred = 0;
        for (index, card) in self.cards.iter().enumerate() {
            if is_in_viewport(dom, card) {
                dom.set_styles(card, &[("opacity", "1"), ("transform", "translateY(0)")]);
                continue;
            }
            let delay = format!("{}ms", index as u64 * self.stagger_ms);
            dom.set_styles(
                card,
                &[
                    ("opacity", "0"),
                    ("transform", hidden_transform.as_str()),
                    ("transition", transition.as_str()),
                    ("transition-delay", delay.as_str()),
                ],
            );
            dom.set_attribute(card, ANIMATE_ATTR, "true");
            deferred += 1;
        }
        debug!(cards = self.cards.len(), deferred, "scroll animations mounted");
        self.enabled = true;
        self.frame_pending = true;
    }

    pub fn handle_scroll<T: From<RevealTask>>(&mut self, scheduler: &mut Scheduler<N, T>) {
        if self.enabled {
            self.debounce.trigger(scheduler, RevealTask::Check.into());
        }
    }

    /// Runs the initial check on the first frame after mount.
    pub fn handle_animation_frame<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        if std::mem::take(&mut self.frame_pending) {
            self.check(dom);
        }
    }

    pub fn run<D: Dom<Node = N>>(&mut self, dom: &mut D, task: RevealTask) {
        match task {
            RevealTask::Check => {
                self.debounce.fired();
                self.check(dom);
            }
        }
    }

    /// Reveals tagged cards now fully in view; returns how many.
    pub fn check<D: Dom<Node = N>>(&self, dom: &mut D) -> usize {
        let mut revealed = 0;
        for card in &self.cards {
            if dom.has_attribute(card, ANIMATE_ATTR) && is_in_viewport(dom, card) {
                dom.set_styles(card, &[("opacity", "1"), ("transform", "translateY(0)")]);
                dom.remove_attribute(card, ANIMATE_ATTR);
                revealed += 1;
            }
        }
        revealed
    }
}
