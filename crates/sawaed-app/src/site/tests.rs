use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use sawaed_common::{EventOutcome, PageEvent, PlatformError, Rect};
use sawaed_config::SiteConfig;
use sawaed_dom::{Dom, MemoryDom, MemoryStore, NodeId, Role, ScrollRequest};
use sawaed_widgets::{ClipboardBackend, CopyCompletions, CopyStatus, CopyTicket};

use super::Site;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

struct RecordingClipboard {
    copied: Rc<RefCell<Vec<String>>>,
}

impl ClipboardBackend for RecordingClipboard {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn set_text(&mut self, text: &str) -> Result<CopyStatus, PlatformError> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(CopyStatus::Copied)
    }
}

/// Answers later, like a clipboard API returning a promise.
struct PromiseClipboard {
    completions: CopyCompletions,
    issued: Rc<RefCell<Vec<CopyTicket>>>,
}

impl ClipboardBackend for PromiseClipboard {
    fn name(&self) -> &'static str {
        "promise"
    }

    fn set_text(&mut self, _text: &str) -> Result<CopyStatus, PlatformError> {
        let ticket = self.completions.ticket();
        self.issued.borrow_mut().push(ticket);
        Ok(CopyStatus::Pending(ticket))
    }
}

struct Page {
    toggle: NodeId,
    nav: NodeId,
    nav_link: NodeId,
    about: NodeId,
    volunteer: NodeId,
    newsletter: NodeId,
    amount: NodeId,
    custom_field: NodeId,
    account: NodeId,
}

fn page() -> (MemoryDom, Page) {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let header = dom
        .build(body, "header")
        .class("site-header")
        .layout(Rect::new(0.0, 0.0, 1280.0, 90.0))
        .finish();
    let toggle = dom.build(header, "button").class("menu-toggle").finish();
    let nav = dom.build(header, "nav").class("nav-menu").finish();
    let nav_link = dom.build(nav, "a").attr("href", "#about").finish();
    let about = dom
        .build(body, "section")
        .id("about")
        .layout(Rect::new(0.0, 1200.0, 1280.0, 400.0))
        .finish();

    let volunteer = dom.build(body, "form").id("volunteer-form").finish();
    for (id, kind, value, required) in [
        ("full-name", "text", "Mona", true),
        ("age", "number", "30", true),
        ("phone", "tel", "01012345678", true),
        ("email", "email", "", false),
        ("city", "text", "Giza", true),
        ("field", "text", "Health", true),
        ("availability", "text", "Evenings", true),
        ("experience", "text", "", false),
        ("motivation", "text", "Community", true),
        ("skills", "text", "", false),
    ] {
        let builder = dom.build(volunteer, "input").id(id).attr("type", kind).value(value);
        if required {
            builder.required();
        }
    }

    let newsletter = dom.build(body, "form").id("newsletter").finish();
    dom.build(newsletter, "input")
        .attr("type", "email")
        .value("reader@example.org");

    let amount = dom
        .build(body, "button")
        .class("amount-btn")
        .attr("data-amount", "250")
        .finish();
    let custom_field = dom
        .build(body, "input")
        .id("custom-donation-amount")
        .attr("type", "number")
        .finish();
    let account = dom
        .build(body, "span")
        .class("account-number")
        .text(" 0012 3456 ")
        .finish();

    (
        dom,
        Page {
            toggle,
            nav,
            nav_link,
            about,
            volunteer,
            newsletter,
            amount,
            custom_field,
            account,
        },
    )
}

fn site() -> (Site<MemoryDom>, Page) {
    let (dom, page) = page();
    let mut site = Site::new(dom, Box::new(MemoryStore::new()), SiteConfig::default());
    site.mount();
    (site, page)
}

#[test]
fn mount_is_idempotent() {
    let (mut site, _) = site();
    assert!(site.is_mounted());
    let report = site.mount();
    assert!(report.bound.contains(&Role::MenuToggle));
    assert!(report.unbound.contains(&Role::FilterTab));
    assert_eq!(site.dom().query_all(".back-to-top").len(), 1);
    assert_eq!(
        site.dom().attribute(&site.dom().query(".account-number").unwrap(), "title"),
        Some("انقر للنسخ".to_string())
    );
}

#[test]
fn valid_volunteer_submit_dispatches_then_plays_overlay() {
    let (mut site, page) = site();
    let outcome = site.handle(PageEvent::Submit {
        form: page.volunteer,
    });
    assert_eq!(outcome, EventOutcome::prevent());

    let opened = site.dom().opened_windows().to_vec();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].0.starts_with("https://wa.me/201012448385?text="));
    assert!(opened[0].0.contains("%D8%A7%D9%84%D8%A8%D8%B1%D9%8A%D8%AF"));
    assert_eq!(site.dom().query_all(".loading-indicator").len(), 1);

    assert_eq!(site.tick(ms(1499)), 0);
    site.tick(ms(1500));
    assert!(site.dom().query(".loading-indicator").is_none());
    let banner = site.dom().query_within(&page.volunteer, ".success-message")[0];
    let name = site.dom().element_by_id("full-name").unwrap();
    assert_eq!(site.dom().value(&name), "");

    site.tick(ms(6500));
    assert_eq!(site.dom().style(&banner, "opacity").as_deref(), Some("0"));
    site.tick(ms(6800));
    assert!(!site.dom().is_connected(&banner));
    assert_eq!(site.pending_tasks(), 0);
}

#[test]
fn invalid_submit_is_blocked_before_dispatch() {
    let (mut site, page) = site();
    let phone = site.dom().element_by_id("phone").unwrap();
    site.dom_mut().set_value(&phone, "02012345678");

    let outcome = site.handle(PageEvent::Submit {
        form: page.volunteer,
    });
    assert!(outcome.default_prevented);
    assert!(site.dom().opened_windows().is_empty());
    assert!(site.dom().query(".loading-indicator").is_none());
    assert_eq!(site.pending_tasks(), 0);
    assert_eq!(
        site.dom().attribute(&phone, "aria-invalid").as_deref(),
        Some("true")
    );
}

#[test]
fn non_dispatch_form_gets_overlay_only() {
    let (mut site, page) = site();
    let outcome = site.handle(PageEvent::Submit {
        form: page.newsletter,
    });
    assert!(outcome.default_prevented);
    assert!(site.dom().opened_windows().is_empty());
    assert_eq!(site.dom().query_all(".loading-indicator").len(), 1);
    site.tick(ms(1500));
    assert_eq!(
        site.dom()
            .query_within(&page.newsletter, ".success-message")
            .len(),
        1
    );
}

#[test]
fn blur_validates_and_input_clears_only_that_field() {
    let (mut site, _) = site();
    let phone = site.dom().element_by_id("phone").unwrap();
    let age = site.dom().element_by_id("age").unwrap();
    site.dom_mut().set_value(&phone, "0101");
    site.dom_mut().set_value(&age, "");

    site.handle(PageEvent::Blur { target: phone });
    site.handle(PageEvent::Blur { target: age });
    assert!(site.dom().has_class(&phone, "error"));
    assert!(site.dom().has_class(&age, "error"));

    site.handle(PageEvent::Input { target: phone });
    assert!(!site.dom().has_class(&phone, "error"));
    assert!(site.dom().has_class(&age, "error"));
}

#[test]
fn inputs_outside_forms_are_not_validated() {
    let (mut site, page) = site();
    site.dom_mut().set_value(&page.custom_field, "abc");
    site.handle(PageEvent::Blur {
        target: page.custom_field,
    });
    assert!(!site.dom().has_class(&page.custom_field, "error"));

    site.dom_mut().set_value(&page.custom_field, "750");
    site.handle(PageEvent::Input {
        target: page.custom_field,
    });
    assert_eq!(
        site.store().get("selectedDonationAmount").as_deref(),
        Some("750")
    );
}

#[test]
fn amount_click_is_prevented_and_stored() {
    let (mut site, page) = site();
    let outcome = site.handle(PageEvent::Click {
        target: page.amount,
    });
    assert_eq!(outcome, EventOutcome::prevent());
    assert!(site.dom().has_class(&page.amount, "selected"));
    assert_eq!(
        site.store().get("selectedDonationAmount").as_deref(),
        Some("250")
    );
}

#[test]
fn anchor_click_scrolls_below_header() {
    let (mut site, page) = site();
    let outcome = site.handle(PageEvent::Click {
        target: page.nav_link,
    });
    assert!(outcome.default_prevented);
    let top = site.dom().offset_top(&page.about) - 90.0;
    assert_eq!(
        site.dom().scroll_requests().last(),
        Some(&ScrollRequest { top, smooth: true })
    );
}

#[test]
fn menu_toggles_and_resize_closes() {
    let (mut site, page) = site();
    site.handle(PageEvent::Click {
        target: page.toggle,
    });
    assert!(site.dom().has_class(&page.nav, "active"));
    site.handle(PageEvent::Resize);
    assert!(!site.dom().has_class(&page.nav, "active"));
}

#[test]
fn copy_click_uses_configured_backend_and_notice_expires() {
    let (dom, page) = page();
    let copied = Rc::new(RefCell::new(Vec::new()));
    let mut site = Site::new(dom, Box::new(MemoryStore::new()), SiteConfig::default())
        .with_clipboard(Box::new(RecordingClipboard {
            copied: Rc::clone(&copied),
        }));
    site.mount();

    site.handle(PageEvent::Click {
        target: page.account,
    });
    assert_eq!(*copied.borrow(), vec!["0012 3456".to_string()]);
    let body = site.dom().body();
    let notice = *site.dom().children(body).last().unwrap();
    assert_eq!(site.dom().text_content(&notice), "تم النسخ!");

    site.tick(ms(2300));
    assert!(!site.dom().is_connected(&notice));
}

#[test]
fn copy_rejected_after_returning_uses_fallback_on_next_tick() {
    let (dom, page) = page();
    let site = Site::new(dom, Box::new(MemoryStore::new()), SiteConfig::default());
    let completions = site.copy_completions();
    let issued = Rc::new(RefCell::new(Vec::new()));
    let copied = Rc::new(RefCell::new(Vec::new()));
    let mut site = site
        .with_clipboard(Box::new(PromiseClipboard {
            completions: completions.clone(),
            issued: Rc::clone(&issued),
        }))
        .with_clipboard_fallback(Box::new(RecordingClipboard {
            copied: Rc::clone(&copied),
        }));
    site.mount();

    site.handle(PageEvent::Click {
        target: page.account,
    });
    let body = site.dom().body();
    let children_before = site.dom().children(body).len();
    assert!(copied.borrow().is_empty());

    let ticket = issued.borrow()[0];
    completions.settle(
        ticket,
        Err(PlatformError::ClipboardError("document is not focused".into())),
    );
    assert_eq!(site.tick(ms(50)), 1);
    assert_eq!(*copied.borrow(), vec!["0012 3456".to_string()]);
    let notice = *site.dom().children(body).last().unwrap();
    assert_eq!(site.dom().children(body).len(), children_before + 1);
    assert_eq!(site.dom().text_content(&notice), "تم النسخ!");

    site.tick(ms(60));
    assert_eq!(site.dom().style(&notice, "opacity").as_deref(), Some("1"));
    site.tick(ms(2350));
    assert!(!site.dom().is_connected(&notice));
}

#[test]
fn scroll_reveals_back_to_top() {
    let (mut site, _) = site();
    let button = site.dom().query(".back-to-top").unwrap();
    site.dom_mut().set_scroll_y(400.0);
    site.handle(PageEvent::Scroll);
    assert_eq!(
        site.dom().style(&button, "visibility").as_deref(),
        Some("visible")
    );
    let outcome = site.handle(PageEvent::Click { target: button });
    assert_eq!(outcome, EventOutcome::proceed());
    assert_eq!(site.dom().scroll_y(), 0.0);
}

#[test]
fn lifecycle_events_proceed() {
    let (mut site, _) = site();
    for event in [
        PageEvent::VisibilityChange { hidden: true },
        PageEvent::Online,
        PageEvent::Offline,
        PageEvent::Unknown,
    ] {
        assert_eq!(site.handle(event), EventOutcome::proceed());
    }
}

#[test]
fn logging_installs_once_from_config() {
    let (dom, _) = page();
    let mut config = SiteConfig::default();
    config.logging.directive = "sawaed=debug".into();
    let site = Site::new(dom, Box::new(MemoryStore::new()), config);
    site.init_logging();
    assert!(!site.init_logging());
}

#[test]
fn require_reports_first_missing_role() {
    let (site, _) = site();
    assert!(site.require(&[Role::MenuToggle, Role::NavMenu]).is_ok());
    let err = site
        .require(&[Role::NavMenu, Role::FilterTab, Role::Copyable])
        .unwrap_err();
    assert_eq!(err.to_string(), "missing page binding: filter_tab");
}
