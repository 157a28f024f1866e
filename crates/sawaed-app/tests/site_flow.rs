use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use sawaed_app::{Site, SiteTask};
use sawaed_common::{EventOutcome, PageEvent, Rect, SiteError};
use sawaed_config::{load_from_path, SiteConfig};
use sawaed_dom::{Dom, MemoryDom, MemoryStore, NodeId};
use sawaed_widgets::RevealTask;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn site(dom: MemoryDom, config: SiteConfig) -> Site<MemoryDom> {
    let mut site = Site::new(dom, Box::new(MemoryStore::new()), config);
    site.mount();
    site
}

#[test]
fn config_file_drives_recipient_and_dispatch_forms() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
[messaging]
recipient = "201155500000"

[dispatch]
placeholder = "n/a"

[[dispatch.forms]]
name = "newsletter"
selector = "#newsletter"
intro = "Subscribe:"
fields = [
  {{ id = "nl-name", label = "Name" }},
  {{ id = "nl-city", label = "City", optional = true }},
]
"##
    )
    .unwrap();
    let config = load_from_path(file.path()).unwrap();

    let mut dom = MemoryDom::new();
    let body = dom.body();
    let form = dom.build(body, "form").id("newsletter").finish();
    dom.build(form, "input")
        .id("nl-name")
        .attr("type", "text")
        .value("Sara Ali")
        .required();
    dom.build(form, "input").id("nl-city").attr("type", "text");

    let mut site = site(dom, config);
    let outcome = site.handle(PageEvent::Submit { form });
    assert_eq!(outcome, EventOutcome::prevent());
    assert_eq!(
        site.dom().opened_windows(),
        &[(
            "https://wa.me/201155500000?text=Subscribe%3A%0AName%3A%20Sara%20Ali%0ACity%3A%20n%2Fa"
                .to_string(),
            "_blank".to_string()
        )]
    );
}

#[test]
fn host_json_events_route_through_the_site() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let form = dom.build(body, "form").class("contact-form").finish();
    for (id, kind) in [
        ("contact-name", "text"),
        ("contact-phone", "tel"),
        ("contact-subject", "text"),
        ("contact-message", "text"),
    ] {
        dom.build(form, "input").id(id).attr("type", kind).required();
    }
    let mut site = site(dom, SiteConfig::default());

    let event: PageEvent<()> =
        PageEvent::from_json(r#"{"type":"Submit","data":{"form":null}}"#).unwrap();
    let event = event.try_map_target(|()| Ok::<_, ()>(form)).unwrap();
    let outcome = site.handle(event);
    assert_eq!(outcome.to_json(), r#"{"default_prevented":true}"#);
    assert_eq!(site.dom().query_within(&form, ".error-message").len(), 4);
    assert!(site.dom().opened_windows().is_empty());
}

struct Projects {
    tabs: Vec<NodeId>,
    items: Vec<NodeId>,
}

fn projects() -> (MemoryDom, Projects) {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let tabs = [None, Some("completed"), Some("ongoing")]
        .into_iter()
        .map(|filter| {
            let tab = dom.build(body, "button").class("filter-tab");
            match filter {
                Some(f) => tab.attr("data-filter", f).finish(),
                None => tab.finish(),
            }
        })
        .collect();
    let items = ["completed", "ongoing", "ongoing urgent", "planned"]
        .into_iter()
        .map(|s| dom.build(body, "article").attr("data-status", s).finish())
        .collect();
    (dom, Projects { tabs, items })
}

fn hidden(site: &Site<MemoryDom>, items: &[NodeId]) -> Vec<bool> {
    items
        .iter()
        .map(|i| site.dom().style(i, "display").as_deref() == Some("none"))
        .collect()
}

#[test]
fn filter_tabs_show_matching_items_after_fade() {
    let (dom, p) = projects();
    let mut site = site(dom, SiteConfig::default());

    site.handle(PageEvent::Click { target: p.tabs[2] });
    site.tick(ms(10));
    assert_eq!(
        site.dom().style(&p.items[1], "opacity").as_deref(),
        Some("1")
    );
    assert_eq!(hidden(&site, &p.items), vec![false, false, false, false]);

    site.tick(ms(300));
    assert_eq!(hidden(&site, &p.items), vec![true, false, false, true]);
    assert!(site.dom().has_class(&p.tabs[2], "active"));

    // A tab without a filter shows everything again.
    site.handle(PageEvent::Click { target: p.tabs[0] });
    site.tick(ms(1000));
    assert_eq!(hidden(&site, &p.items), vec![false; 4]);
    assert!(!site.dom().has_class(&p.tabs[2], "active"));
}

#[test]
fn category_click_stores_selection_and_scrolls_to_payment() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    dom.build(body, "header")
        .class("site-header")
        .layout(Rect::new(0.0, 0.0, 1280.0, 70.0));
    let card = dom
        .build(body, "button")
        .class("select-category")
        .attr("data-category", "orphans")
        .attr("data-amount", "500")
        .finish();
    dom.build(body, "section")
        .class("payment-methods")
        .layout(Rect::new(0.0, 2000.0, 1280.0, 600.0));
    let monthly = dom
        .build(body, "input")
        .attr("type", "radio")
        .attr("name", "donation-frequency")
        .attr("value", "monthly")
        .finish();
    let mut site = site(dom, SiteConfig::default());

    site.handle(PageEvent::Click { target: card });
    site.handle(PageEvent::Change { target: monthly });

    let store = site.store();
    assert_eq!(store.get("selectedCategory").as_deref(), Some("orphans"));
    assert_eq!(store.get("selectedDonationAmount").as_deref(), Some("500"));
    assert_eq!(store.get("donationFrequency").as_deref(), Some("monthly"));
    assert_eq!(site.dom().scroll_y(), 1930.0);
}

#[test]
fn offscreen_cards_reveal_after_debounced_scroll() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let card = dom
        .build(body, "div")
        .class("project-card")
        .layout(Rect::new(0.0, 1500.0, 300.0, 200.0))
        .finish();
    let mut site = site(dom, SiteConfig::default());
    site.handle(PageEvent::AnimationFrame);
    assert!(site.dom().has_attribute(&card, "data-animate"));

    site.dom_mut().set_scroll_y(1000.0);
    site.handle(PageEvent::Scroll);
    site.handle(PageEvent::Scroll);
    assert_eq!(site.pending_tasks(), 1);
    assert_eq!(site.tick(ms(20)), 1);
    assert!(!site.dom().has_attribute(&card, "data-animate"));
    assert_eq!(site.dom().style(&card, "opacity").as_deref(), Some("1"));
}

#[test]
fn site_task_wraps_every_component_task() {
    let task: SiteTask<NodeId> = RevealTask::Check.into();
    assert_eq!(task, SiteTask::Reveal(RevealTask::Check));
}

#[test]
fn bad_config_file_is_a_site_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[timing]\noverlay_delay_ms = 99999\n").unwrap();
    let result = Site::from_config_file(MemoryDom::new(), Box::new(MemoryStore::new()), file.path());
    assert!(matches!(result, Err(SiteError::Config(_))));

    let missing = Site::from_config_file(
        MemoryDom::new(),
        Box::new(MemoryStore::new()),
        &file.path().with_extension("absent"),
    );
    assert!(missing.is_err());
}
