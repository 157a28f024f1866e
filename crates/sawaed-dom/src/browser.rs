//! Live page backend over `web-sys`.

use sawaed_common::{PlatformError, Rect, Viewport};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Node, NodeList, ScrollBehavior, ScrollToOptions, Storage, Window,
};

use crate::dom::Dom;
use crate::storage::SessionStore;

fn js_error(context: &str, err: JsValue) -> PlatformError {
    PlatformError::DomError(format!("{context}: {err:?}"))
}

fn log_js(context: &str, result: Result<impl Sized, JsValue>) {
    if let Err(e) = result {
        warn!("{context} failed: {e:?}");
    }
}

fn elements(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            warn!(selector, "querySelectorAll failed: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new() -> Result<Self, PlatformError> {
        let window =
            web_sys::window().ok_or_else(|| PlatformError::NotSupported("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PlatformError::NotSupported("document".into()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for BrowserDom {
    type Node = Element;

    fn body(&self) -> Element {
        match self.document.body() {
            Some(body) => body.into(),
            None => self.document.document_element().unwrap_or_else(|| self.create_detached("body")),
        }
    }

    fn head(&self) -> Element {
        match self.document.head() {
            Some(head) => head.into(),
            None => self.body(),
        }
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector), selector)
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        elements(root.query_selector_all(selector), selector)
    }

    fn matches(&self, node: &Element, selector: &str) -> bool {
        node.matches(selector).unwrap_or(false)
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn next_sibling(&self, node: &Element) -> Option<Element> {
        node.next_element_sibling()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn create_element(&mut self, tag: &str) -> Element {
        self.create_detached(tag)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        log_js("appendChild", parent.append_child(child));
    }

    fn insert_after(&mut self, reference: &Element, node: &Element) {
        let node: &Node = node;
        log_js("after", reference.after_with_node_1(node));
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        log_js("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        log_js("classList.remove", node.class_list().remove_1(class));
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        log_js("setAttribute", node.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        log_js("removeAttribute", node.remove_attribute(name));
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text_content(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        let el = node.dyn_ref::<HtmlElement>()?;
        el.style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            log_js("style.removeProperty", style.remove_property(property));
        } else {
            log_js("style.setProperty", style.set_property(property, value));
        }
    }

    fn focus(&mut self, node: &Element) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            log_js("focus", el.focus());
        }
    }

    fn reset_form(&mut self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn viewport(&self) -> Viewport {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(
            dim(self.window.inner_width()),
            dim(self.window.inner_height()),
        )
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64, smooth: bool) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn open_window(&mut self, url: &str, target: &str) {
        log_js(
            "window.open",
            self.window.open_with_url_and_target(url, target),
        );
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
}

impl BrowserDom {
    fn create_detached(&self, tag: &str) -> Element {
        // Tag names come from this crate's callers and are always valid.
        self.document
            .create_element(tag)
            .expect("createElement with a static tag name")
    }
}

/// `window.sessionStorage`.
pub struct BrowserSessionStore {
    storage: Storage,
}

impl BrowserSessionStore {
    pub fn new() -> Result<Self, PlatformError> {
        let window =
            web_sys::window().ok_or_else(|| PlatformError::NotSupported("window".into()))?;
        let storage = window
            .session_storage()
            .map_err(|e| js_error("sessionStorage", e))?
            .ok_or_else(|| PlatformError::NotSupported("sessionStorage".into()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PlatformError::StorageError(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), PlatformError> {
        self.storage
            .remove_item(key)
            .map_err(|e| PlatformError::StorageError(format!("{e:?}")))
    }
}
