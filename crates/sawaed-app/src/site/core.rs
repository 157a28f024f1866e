//! `Site` struct definition and constructor.

use std::time::Duration;

use sawaed_config::SiteConfig;
use sawaed_dom::{Bindings, Dom, Scheduler, SessionStore};
use sawaed_forms::{Dispatcher, FormValidator, Overlay};
use sawaed_widgets::{
    BackToTop, ClipboardBackend, CopyCompletions, CopyToClipboard, DonationSelector, FilterTabs,
    MobileMenu, ScrollAnimations, SmoothScroll,
};

use super::tasks::SiteTask;

/// Every behavior of the site, wired to one page.
pub struct Site<D: Dom> {
    pub(super) dom: D,
    pub(super) config: SiteConfig,
    pub(super) bindings: Bindings,
    pub(super) store: Box<dyn SessionStore>,
    pub(super) scheduler: Scheduler<D::Node, SiteTask<D::Node>>,

    // Forms
    pub(super) forms: FormValidator,
    pub(super) dispatcher: Dispatcher,
    pub(super) overlay: Overlay,

    // Widgets
    pub(super) menu: MobileMenu,
    pub(super) scroll: SmoothScroll,
    pub(super) donation: DonationSelector,
    pub(super) filters: FilterTabs,
    pub(super) clipboard: CopyToClipboard<D::Node>,
    pub(super) back_to_top: BackToTop<D::Node>,
    pub(super) animations: ScrollAnimations<D::Node>,

    pub(super) mounted: bool,
}

impl<D: Dom> Site<D> {
    pub fn new(dom: D, store: Box<dyn SessionStore>, config: SiteConfig) -> Self {
        let timing = &config.timing;
        let layout = &config.layout;
        let messages = &config.messages;
        Self {
            bindings: Bindings::from_config(&config.bindings),
            scheduler: Scheduler::new(),
            forms: FormValidator::new(messages.validation.clone()),
            dispatcher: Dispatcher::new(config.messaging.clone(), config.dispatch.clone()),
            overlay: Overlay::new(timing.clone(), messages.submit_success.clone()),
            menu: MobileMenu::new(layout.mobile_breakpoint),
            scroll: SmoothScroll::new(layout.header_fallback_height),
            donation: DonationSelector::new(config.storage.clone()),
            filters: FilterTabs::new(timing.fade_in_delay(), timing.fade()),
            clipboard: CopyToClipboard::new(messages.clone(), timing),
            back_to_top: BackToTop::new(
                layout.back_to_top_threshold,
                messages.back_to_top_label.clone(),
            ),
            animations: ScrollAnimations::new(layout, timing.scroll_debounce()),
            mounted: false,
            dom,
            store,
            config,
        }
    }

    pub fn with_clipboard(mut self, backend: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = self.clipboard.with_primary(backend);
        self
    }

    pub fn with_clipboard_fallback(mut self, backend: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = self.clipboard.with_fallback(backend);
        self
    }

    /// Queue asynchronous clipboard backends report to; drained by
    /// [`tick`](Self::tick).
    pub fn copy_completions(&self) -> CopyCompletions {
        self.clipboard.completions()
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Time of the last [`tick`](Self::tick).
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }
}
