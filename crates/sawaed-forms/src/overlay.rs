//! Busy overlay and success banner shown around a submit.
//!
//! Timeline after [`Overlay::begin`]:
//! 1. a full-screen loader is appended to the body,
//! 2. after `overlay_delay` the loader goes, a success banner is appended to
//!    the form and the form is reset,
//! 3. after `success_banner` the banner fades,
//! 4. after `fade` it is removed.
//!
//! Each step re-checks that its element is still in the document.

use sawaed_config::schema::TimingConfig;
use sawaed_dom::{Dom, Scheduler};
use tracing::debug;

pub const LOADER_CLASS: &str = "loading-indicator";
pub const BANNER_CLASS: &str = "success-message";
const SPINNER_KEYFRAMES_ID: &str = "spinner-keyframes";
const BANNER_KEYFRAMES_ID: &str = "message-keyframes";

const LOADER_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("background", "rgba(0,0,0,0.5)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("z-index", "9999"),
];

const SPINNER_STYLE: &[(&str, &str)] = &[
    ("width", "50px"),
    ("height", "50px"),
    ("border", "4px solid rgba(255,255,255,0.3)"),
    ("border-top-color", "white"),
    ("border-radius", "50%"),
    ("animation", "spin 1s linear infinite"),
];

const BANNER_STYLE: &[(&str, &str)] = &[
    ("background", "#4caf50"),
    ("color", "white"),
    ("padding", "1rem 1.5rem"),
    ("border-radius", "8px"),
    ("margin-top", "1rem"),
    ("text-align", "center"),
    ("animation", "slideDown 0.3s ease"),
];

const SPINNER_KEYFRAMES: &str = "@keyframes spin { to { transform: rotate(360deg); } }";
const BANNER_KEYFRAMES: &str = "@keyframes slideDown { \
    from { opacity: 0; transform: translateY(-10px); } \
    to { opacity: 1; transform: translateY(0); } }";

/// Deferred overlay work.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayTask<N> {
    /// Hide the loader, show the banner, reset the form.
    Finish { form: N, loader: N },
    FadeBanner { banner: N },
    RemoveBanner { banner: N },
}

#[derive(Debug, Clone)]
pub struct Overlay {
    timing: TimingConfig,
    success_text: String,
}

impl Overlay {
    pub fn new(timing: TimingConfig, success_text: impl Into<String>) -> Self {
        Self {
            timing,
            success_text: success_text.into(),
        }
    }

    /// Shows the loader and schedules the rest of the timeline.
    pub fn begin<D, T>(
        &self,
        dom: &mut D,
        scheduler: &mut Scheduler<D::Node, T>,
        form: &D::Node,
    ) -> D::Node
    where
        D: Dom,
        T: From<OverlayTask<D::Node>>,
    {
        let loader = self.show_loader(dom);
        scheduler.schedule_owned(
            self.timing.overlay_delay(),
            loader.clone(),
            OverlayTask::Finish {
                form: form.clone(),
                loader: loader.clone(),
            }
            .into(),
        );
        loader
    }

    pub fn run<D, T>(
        &self,
        dom: &mut D,
        scheduler: &mut Scheduler<D::Node, T>,
        task: OverlayTask<D::Node>,
    ) where
        D: Dom,
        T: From<OverlayTask<D::Node>>,
    {
        match task {
            OverlayTask::Finish { form, loader } => {
                if dom.is_connected(&loader) {
                    dom.remove(&loader);
                }
                if !dom.is_connected(&form) {
                    debug!("form left the page before the overlay finished");
                    return;
                }
                let banner = self.show_banner(dom, &form);
                dom.reset_form(&form);
                scheduler.schedule_owned(
                    self.timing.success_banner(),
                    banner.clone(),
                    OverlayTask::FadeBanner {
                        banner: banner.clone(),
                    }
                    .into(),
                );
            }
            OverlayTask::FadeBanner { banner } => {
                if !dom.is_connected(&banner) {
                    return;
                }
                dom.set_style(&banner, "opacity", "0");
                scheduler.schedule_owned(
                    self.timing.fade(),
                    banner.clone(),
                    OverlayTask::RemoveBanner { banner }.into(),
                );
            }
            OverlayTask::RemoveBanner { banner } => {
                if dom.is_connected(&banner) {
                    dom.remove(&banner);
                }
            }
        }
    }

    fn show_loader<D: Dom>(&self, dom: &mut D) -> D::Node {
        let loader = dom.create_element("div");
        dom.add_class(&loader, LOADER_CLASS);
        dom.set_styles(&loader, LOADER_STYLE);
        let spinner = dom.create_element("div");
        dom.add_class(&spinner, "spinner");
        dom.set_styles(&spinner, SPINNER_STYLE);
        dom.append_child(&loader, &spinner);

        ensure_keyframes(dom, SPINNER_KEYFRAMES_ID, SPINNER_KEYFRAMES);
        let body = dom.body();
        dom.append_child(&body, &loader);
        loader
    }

    fn show_banner<D: Dom>(&self, dom: &mut D, form: &D::Node) -> D::Node {
        let banner = dom.create_element("div");
        dom.add_class(&banner, BANNER_CLASS);
        dom.set_text_content(&banner, &self.success_text);
        dom.set_styles(&banner, BANNER_STYLE);
        ensure_keyframes(dom, BANNER_KEYFRAMES_ID, BANNER_KEYFRAMES);
        dom.append_child(form, &banner);
        banner
    }
}

/// Adds a `<style id=..>` to the head once per page.
fn ensure_keyframes<D: Dom>(dom: &mut D, id: &str, css: &str) {
    if dom.element_by_id(id).is_some() {
        return;
    }
    let style = dom.create_element("style");
    dom.set_attribute(&style, "id", id);
    dom.set_text_content(&style, css);
    let head = dom.head();
    dom.append_child(&head, &style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sawaed_dom::{MemoryDom, NodeId};
    use std::time::Duration;

    type Sched = Scheduler<NodeId, OverlayTask<NodeId>>;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn overlay() -> Overlay {
        Overlay::new(TimingConfig::default(), "sent")
    }

    fn advance(o: &Overlay, dom: &mut MemoryDom, s: &mut Sched, until: Duration) {
        while let Some(task) = s.pop_due(until) {
            o.run(dom, s, task);
        }
        s.advance_to(until);
    }

    fn form_page() -> (MemoryDom, NodeId, NodeId) {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let form = dom.build(body, "form").finish();
        let input = dom.build(form, "input").value("typed").finish();
        (dom, form, input)
    }

    #[test]
    fn full_timeline() {
        let (mut dom, form, input) = form_page();
        let o = overlay();
        let mut s = Sched::new();

        let loader = o.begin(&mut dom, &mut s, &form);
        assert!(dom.is_connected(&loader));
        assert_eq!(dom.query_all(".spinner").len(), 1);
        assert!(dom.element_by_id("spinner-keyframes").is_some());

        advance(&o, &mut dom, &mut s, ms(1499));
        assert!(dom.is_connected(&loader));

        advance(&o, &mut dom, &mut s, ms(1500));
        assert!(!dom.is_connected(&loader));
        let banner = dom.query(".success-message").unwrap();
        assert_eq!(dom.text_content(&banner), "sent");
        assert_eq!(dom.parent(&banner), Some(form));
        assert_eq!(dom.value(&input), "");

        advance(&o, &mut dom, &mut s, ms(6500));
        assert_eq!(dom.style(&banner, "opacity").as_deref(), Some("0"));
        assert!(dom.is_connected(&banner));

        advance(&o, &mut dom, &mut s, ms(6800));
        assert!(!dom.is_connected(&banner));
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn keyframes_are_added_once() {
        let (mut dom, form, _) = form_page();
        let o = overlay();
        let mut s = Sched::new();
        o.begin(&mut dom, &mut s, &form);
        o.begin(&mut dom, &mut s, &form);
        advance(&o, &mut dom, &mut s, ms(2000));
        assert_eq!(dom.query_all("#spinner-keyframes").len(), 1);
        assert_eq!(dom.query_all("#message-keyframes").len(), 1);
        // Each submit cleans up its own loader and shows its own banner.
        assert!(dom.query_all(".loading-indicator").is_empty());
        assert_eq!(dom.query_all(".success-message").len(), 2);
    }

    #[test]
    fn removed_form_gets_no_banner() {
        let (mut dom, form, _) = form_page();
        let o = overlay();
        let mut s = Sched::new();
        let loader = o.begin(&mut dom, &mut s, &form);
        dom.remove(&form);
        advance(&o, &mut dom, &mut s, ms(10_000));
        assert!(!dom.is_connected(&loader));
        assert!(dom.query(".success-message").is_none());
    }

    #[test]
    fn banner_removed_early_is_left_alone() {
        let (mut dom, form, _) = form_page();
        let o = overlay();
        let mut s = Sched::new();
        o.begin(&mut dom, &mut s, &form);
        advance(&o, &mut dom, &mut s, ms(1500));
        let banner = dom.query(".success-message").unwrap();
        dom.remove(&banner);
        advance(&o, &mut dom, &mut s, ms(10_000));
        assert_eq!(dom.style(&banner, "opacity"), None);
    }
}
