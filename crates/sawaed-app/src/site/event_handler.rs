//! Routing of host page events to the behaviors.

use sawaed_common::{EventOutcome, PageEvent};
use sawaed_dom::{Dom, Role};
use tracing::{debug, info};

use super::core::Site;

impl<D: Dom> Site<D> {
    /// Handles one page event and says whether the host should suppress the
    /// browser's default action.
    pub fn handle(&mut self, event: PageEvent<D::Node>) -> EventOutcome {
        debug!(kind = event.kind(), "page event");
        match event {
            PageEvent::Click { target } => self.on_click(&target),
            PageEvent::Input { target } => {
                self.on_input(&target);
                EventOutcome::proceed()
            }
            PageEvent::Blur { target } => {
                self.on_blur(&target);
                EventOutcome::proceed()
            }
            PageEvent::Change { target } => {
                self.donation.handle_frequency_change(
                    &self.dom,
                    &self.bindings,
                    self.store.as_mut(),
                    &target,
                );
                EventOutcome::proceed()
            }
            PageEvent::Submit { form } => self.on_submit(&form),
            PageEvent::MouseEnter { target } => {
                self.back_to_top.handle_hover(&mut self.dom, &target, true);
                EventOutcome::proceed()
            }
            PageEvent::MouseLeave { target } => {
                self.back_to_top.handle_hover(&mut self.dom, &target, false);
                EventOutcome::proceed()
            }
            PageEvent::Scroll => {
                self.back_to_top.handle_scroll(&mut self.dom);
                self.animations.handle_scroll(&mut self.scheduler);
                EventOutcome::proceed()
            }
            PageEvent::Resize => {
                self.menu.handle_resize(&mut self.dom, &self.bindings);
                EventOutcome::proceed()
            }
            PageEvent::AnimationFrame => {
                self.animations.handle_animation_frame(&mut self.dom);
                EventOutcome::proceed()
            }
            PageEvent::VisibilityChange { hidden } => {
                if self.config.logging.lifecycle_events {
                    info!(hidden, "{}", if hidden { "page hidden" } else { "page visible" });
                }
                EventOutcome::proceed()
            }
            PageEvent::Online => {
                if self.config.logging.lifecycle_events {
                    info!("connection restored");
                }
                EventOutcome::proceed()
            }
            PageEvent::Offline => {
                if self.config.logging.lifecycle_events {
                    info!("connection lost");
                }
                EventOutcome::proceed()
            }
            PageEvent::Unknown => EventOutcome::proceed(),
        }
    }

    fn on_click(&mut self, target: &D::Node) -> EventOutcome {
        if self.back_to_top.handle_click(&mut self.dom, target) {
            return EventOutcome::proceed();
        }
        self.menu.handle_click(&mut self.dom, &self.bindings, target);

        let mut outcome = self.scroll.handle_click(&mut self.dom, &self.bindings, target);
        outcome = outcome.merge(self.donation.handle_amount_click(
            &mut self.dom,
            &self.bindings,
            self.store.as_mut(),
            target,
        ));
        self.donation.handle_category_click(
            &mut self.dom,
            &self.bindings,
            self.store.as_mut(),
            &self.scroll,
            target,
        );
        self.filters
            .handle_click(&mut self.dom, &self.bindings, &mut self.scheduler, target);
        self.clipboard
            .handle_click(&mut self.dom, &self.bindings, &mut self.scheduler, target);
        outcome
    }

    /// Fields of a form, as opposed to free-standing inputs.
    fn is_form_field(&self, target: &D::Node) -> bool {
        self.bindings.is(&self.dom, target, Role::FormField)
            && self.bindings.closest(&self.dom, target, Role::Form).is_some()
    }

    fn on_input(&mut self, target: &D::Node) {
        if self.is_form_field(target) {
            self.forms.on_edit(&mut self.dom, target);
        }
        self.donation
            .handle_custom_input(&self.dom, &self.bindings, self.store.as_mut(), target);
    }

    fn on_blur(&mut self, target: &D::Node) {
        if self.is_form_field(target) {
            self.forms.validate_field(&mut self.dom, target);
        }
    }

    /// Validation gates everything. A valid dispatch form opens its
    /// deep-link, then every valid form plays the overlay. The browser
    /// never submits.
    fn on_submit(&mut self, form: &D::Node) -> EventOutcome {
        let state = self.forms.validate_form(&mut self.dom, &self.bindings, form);
        if !state.is_valid() {
            debug!(invalid = state.invalid().count(), "submit blocked");
            return EventOutcome::prevent();
        }
        if let Some(definition) = self.dispatcher.form_for(&self.dom, form) {
            self.dispatcher.dispatch(&mut self.dom, definition);
        }
        self.overlay.begin(&mut self.dom, &mut self.scheduler, form);
        EventOutcome::prevent()
    }
}
