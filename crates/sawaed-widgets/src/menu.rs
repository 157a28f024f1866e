//! Collapsible navigation for narrow viewports.

use sawaed_dom::{Bindings, Dom, Role};
use tracing::debug;

const ACTIVE: &str = "active";
const BODY_OPEN: &str = "menu-open";

#[derive(Debug, Clone)]
pub struct MobileMenu {
    breakpoint: f64,
}

impl MobileMenu {
    pub fn new(breakpoint: f64) -> Self {
        Self { breakpoint }
    }

    fn is_narrow<D: Dom>(&self, dom: &D) -> bool {
        dom.viewport().width <= self.breakpoint
    }

    fn parts<D: Dom>(dom: &D, bindings: &Bindings) -> Option<(D::Node, D::Node)> {
        Some((
            bindings.resolve(dom, Role::MenuToggle)?,
            bindings.resolve(dom, Role::NavMenu)?,
        ))
    }

    pub fn is_open<D: Dom>(&self, dom: &D, bindings: &Bindings) -> bool {
        Self::parts(dom, bindings).is_some_and(|(_, nav)| dom.has_class(&nav, ACTIVE))
    }

    /// Document click. Returns `true` if the click toggled the menu.
    pub fn handle_click<D: Dom>(&self, dom: &mut D, bindings: &Bindings, target: &D::Node) -> bool {
        let Some((toggle, nav)) = Self::parts(dom, bindings) else {
            return false;
        };
        if dom.contains(&toggle, target) {
            self.toggle(dom, &toggle, &nav);
            return true;
        }
        if !self.is_narrow(dom) {
            return false;
        }
        let inside_nav = dom.contains(&nav, target);
        let on_link = inside_nav
            && dom
                .closest(target, "a")
                .is_some_and(|link| dom.contains(&nav, &link));
        if on_link || !inside_nav {
            self.close(dom, &toggle, &nav);
        }
        false
    }

    pub fn handle_resize<D: Dom>(&self, dom: &mut D, bindings: &Bindings) {
        if self.is_narrow(dom) {
            return;
        }
        if let Some((toggle, nav)) = Self::parts(dom, bindings) {
            self.close(dom, &toggle, &nav);
        }
    }

    fn toggle<D: Dom>(&self, dom: &mut D, toggle: &D::Node, nav: &D::Node) {
        let open = dom.toggle_class(nav, ACTIVE);
        dom.toggle_class(toggle, ACTIVE);
        let body = dom.body();
        dom.toggle_class(&body, BODY_OPEN);
        dom.set_attribute(toggle, "aria-expanded", if open { "true" } else { "false" });
        debug!(open, "menu toggled");
    }

    fn close<D: Dom>(&self, dom: &mut D, toggle: &D::Node, nav: &D::Node) {
        dom.remove_class(nav, ACTIVE);
        dom.remove_class(toggle, ACTIVE);
        let body = dom.body();
        dom.remove_class(&body, BODY_OPEN);
        dom.set_attribute(toggle, "aria-expanded", "false");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawaed_common::Viewport;
    use sawaed_config::schema::BindingsConfig;
    use sawaed_dom::{MemoryDom, NodeId};

    struct Page {
        dom: MemoryDom,
        toggle: NodeId,
        nav: NodeId,
        link: NodeId,
        outside: NodeId,
    }

    fn page(width: f64) -> Page {
        let mut dom = MemoryDom::new();
        dom.set_viewport(Viewport::new(width, 800.0));
        let body = dom.body();
        let toggle = dom.build(body, "button").class("menu-toggle").finish();
        let nav = dom.build(body, "ul").class("nav-menu").finish();
        let item = dom.build(nav, "li").finish();
        let link = dom.build(item, "a").attr("href", "about.html").finish();
        let outside = dom.build(body, "main").finish();
        Page {
            dom,
            toggle,
            nav,
            link,
            outside,
        }
    }

    fn bindings() -> Bindings {
        Bindings::from_config(&BindingsConfig::default())
    }

    #[test]
    fn toggle_syncs_classes_and_aria() {
        let mut p = page(400.0);
        let menu = MobileMenu::new(768.0);
        assert!(menu.handle_click(&mut p.dom, &bindings(), &p.toggle));
        assert!(menu.is_open(&p.dom, &bindings()));
        assert!(p.dom.has_class(&p.toggle, "active"));
        assert!(p.dom.has_class(&p.dom.body(), "menu-open"));
        assert_eq!(
            p.dom.attribute(&p.toggle, "aria-expanded").as_deref(),
            Some("true")
        );

        menu.handle_click(&mut p.dom, &bindings(), &p.toggle);
        assert!(!menu.is_open(&p.dom, &bindings()));
        assert_eq!(
            p.dom.attribute(&p.toggle, "aria-expanded").as_deref(),
            Some("false")
        );
    }

    #[test]
    fn narrow_link_and_outside_clicks_close() {
        let menu = MobileMenu::new(768.0);
        for target in ["link", "outside"] {
            let mut p = page(768.0);
            menu.handle_click(&mut p.dom, &bindings(), &p.toggle);
            let node = if target == "link" { p.link } else { p.outside };
            assert!(!menu.handle_click(&mut p.dom, &bindings(), &node));
            assert!(!menu.is_open(&p.dom, &bindings()), "{target} click");
        }
    }

    #[test]
    fn click_inside_nav_but_not_on_link_keeps_open() {
        let mut p = page(400.0);
        let menu = MobileMenu::new(768.0);
        menu.handle_click(&mut p.dom, &bindings(), &p.toggle);
        let nav = p.nav;
        menu.handle_click(&mut p.dom, &bindings(), &nav);
        assert!(menu.is_open(&p.dom, &bindings()));
    }

    #[test]
    fn wide_viewport_ignores_outside_clicks() {
        let mut p = page(1024.0);
        let menu = MobileMenu::new(768.0);
        menu.handle_click(&mut p.dom, &bindings(), &p.toggle);
        menu.handle_click(&mut p.dom, &bindings(), &p.outside);
        assert!(menu.is_open(&p.dom, &bindings()));
    }

    #[test]
    fn resize_above_breakpoint_closes() {
        let mut p = page(400.0);
        let menu = MobileMenu::new(768.0);
        menu.handle_click(&mut p.dom, &bindings(), &p.toggle);
        menu.handle_resize(&mut p.dom, &bindings());
        assert!(menu.is_open(&p.dom, &bindings()));

        p.dom.set_viewport(Viewport::new(1200.0, 800.0));
        menu.handle_resize(&mut p.dom, &bindings());
        assert!(!menu.is_open(&p.dom, &bindings()));
    }

    #[test]
    fn page_without_menu_is_ignored() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let menu = MobileMenu::new(768.0);
        assert!(!menu.handle_click(&mut dom, &bindings(), &body));
        menu.handle_resize(&mut dom, &bindings());
    }
}
