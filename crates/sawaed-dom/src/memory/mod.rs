//! In-memory document used by tests and headless hosts.
//!
//! Nodes live in an arena and are never freed; removal only detaches them,
//! so stale handles held by deferred tasks stay valid and report
//! `is_connected() == false`.

use std::collections::BTreeMap;

use sawaed_common::{Rect, Viewport};
use tracing::warn;

use crate::dom::Dom;
use crate::selector::{SelectorList, SelectorSubject};


/// Handle to a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A `scroll_to` call recorded by the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub smooth: bool,
}

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    styles: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: Rect,
}

impl SelectorSubject for NodeData {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

#[derive(Debug)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    viewport: Viewport,
    scroll_y: f64,
    reduced_motion: bool,
    focused: Option<NodeId>,
    scroll_requests: Vec<ScrollRequest>,
    opened: Vec<(String, String)>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// An empty `html > (head, body)` document with a default viewport.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            viewport: Viewport::default(),
            scroll_y: 0.0,
            reduced_motion: false,
            focused: None,
            scroll_requests: Vec::new(),
            opened: Vec::new(),
        };
        dom.root = dom.alloc("html");
        dom.head = dom.alloc("head");
        dom.body = dom.alloc("body");
        dom.attach(dom.root, dom.head);
        dom.attach(dom.root, dom.body);
        dom
    }

    /// Starts building a new element appended to `parent`.
    pub fn build(&mut self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        let node = self.alloc(tag);
        self.attach(parent, node);
        ElementBuilder { dom: self, node }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Moves the page without recording a scroll request, as user scrolling would.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Places `node` at `rect` in document coordinates.
    pub fn set_layout(&mut self, node: NodeId, rect: Rect) {
        self.nodes[node.0].layout = rect;
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// `(url, target)` pairs passed to `open_window`, oldest first.
    pub fn opened_windows(&self) -> &[(String, String)] {
        &self.opened
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        });
        id
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0]
    }

    fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.data(node).parent {
            self.data_mut(parent).children.retain(|&c| c != node);
            self.data_mut(node).parent = None;
        }
    }

    fn attach(&mut self, parent: NodeId, node: NodeId) {
        self.detach(node);
        self.data_mut(parent).children.push(node);
        self.data_mut(node).parent = Some(parent);
    }

    fn descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.data(root).children {
            out.push(child);
            self.descendants(child, out);
        }
    }

    fn select(&self, root: NodeId, selector: &str, include_root: bool) -> Vec<NodeId> {
        let list = match SelectorList::parse(selector) {
            Ok(list) => list,
            Err(e) => {
                warn!(selector, "invalid selector: {e}");
                return Vec::new();
            }
        };
        let mut candidates = Vec::new();
        if include_root {
            candidates.push(root);
        }
        self.descendants(root, &mut candidates);
        candidates
            .into_iter()
            .filter(|&n| list.matches(self.data(n)))
            .collect()
    }

    fn set_class_attr(&mut self, node: NodeId, value: &str) {
        self.data_mut(node).classes = value.split_whitespace().map(str::to_string).collect();
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn body(&self) -> NodeId {
        self.body
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut all = Vec::new();
        self.descendants(self.root, &mut all);
        all.into_iter()
            .find(|&n| self.data(n).attrs.get("id").map(String::as_str) == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.root, selector, true)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*root, selector, false)
    }

    fn matches(&self, node: &NodeId, selector: &str) -> bool {
        match SelectorList::parse(selector) {
            Ok(list) => list.matches(self.data(*node)),
            Err(e) => {
                warn!(selector, "invalid selector: {e}");
                false
            }
        }
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.data(*node).parent
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let parent = self.data(*node).parent?;
        let siblings = &self.data(parent).children;
        let pos = siblings.iter().position(|c| c == node)?;
        siblings.get(pos + 1).copied()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(n) = current {
            if n == *ancestor {
                return true;
            }
            current = self.data(n).parent;
        }
        false
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(&self.root, node)
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.data(*node).tag.clone()
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(tag)
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.attach(*parent, *child);
    }

    fn insert_after(&mut self, reference: &NodeId, node: &NodeId) {
        let Some(parent) = self.data(*reference).parent else {
            return;
        };
        self.detach(*node);
        let siblings = &mut self.data_mut(parent).children;
        let pos = siblings
            .iter()
            .position(|c| c == reference)
            .map_or(siblings.len(), |p| p + 1);
        siblings.insert(pos, *node);
        self.data_mut(*node).parent = Some(parent);
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
        if self.focused.is_some_and(|f| !self.is_connected(&f)) {
            self.focused = None;
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        SelectorSubject::has_class(self.data(*node), class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let classes = &mut self.data_mut(*node).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.data_mut(*node).classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let data = self.data(*node);
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if name == "class" {
            self.set_class_attr(*node, value);
        } else {
            self.data_mut(*node)
                .attrs
                .insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        if name == "class" {
            self.data_mut(*node).classes.clear();
        } else {
            self.data_mut(*node).attrs.remove(name);
        }
    }

    fn text_content(&self, node: &NodeId) -> String {
        let mut out = self.data(*node).text.clone();
        for child in &self.data(*node).children {
            out.push_str(&self.text_content(child));
        }
        out
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.data_mut(*node).children);
        for child in children {
            self.data_mut(child).parent = None;
        }
        self.data_mut(*node).text = text.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        self.data(*node).value.clone()
    }

    fn set_value(&mut self, node: &NodeId, value: &str) {
        self.data_mut(*node).value = value.to_string();
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.data(*node).styles.get(property).cloned()
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let styles = &mut self.data_mut(*node).styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn focus(&mut self, node: &NodeId) {
        if self.is_connected(node) {
            self.focused = Some(*node);
        }
    }

    fn reset_form(&mut self, form: &NodeId) {
        for control in self.query_within(form, "input, textarea, select") {
            let default = self.data(control).attrs.get("value").cloned();
            self.data_mut(control).value = default.unwrap_or_default();
        }
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        self.data(*node).layout.offset_y(-self.scroll_y)
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.data(*node).layout.top()
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.data(*node).layout.height
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64, smooth: bool) {
        self.scroll_requests.push(ScrollRequest { top, smooth });
        self.scroll_y = top.max(0.0);
    }

    fn open_window(&mut self, url: &str, target: &str) {
        self.opened.push((url.to_string(), target.to_string()));
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Fluent construction of test documents.
///
/// ```
/// use sawaed_dom::{Dom, MemoryDom};
///
/// let mut dom = MemoryDom::new();
/// let body = dom.body();
/// let form = dom.build(body, "form").id("contact").finish();
/// let name = dom.build(form, "input").attr("type", "text").required().finish();
/// assert!(dom.has_attribute(&name, "required"));
/// ```
pub struct ElementBuilder<'a> {
    dom: &'a mut MemoryDom,
    node: NodeId,
}

impl ElementBuilder<'_> {
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.dom.add_class(&self.node, class);
        }
        self
    }

    /// Sets an attribute. A `value` attribute also seeds the live value.
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.dom.set_attribute(&self.node, name, value);
        if name == "value" {
            self.dom.set_value(&self.node, value);
        }
        self
    }

    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn text(self, text: &str) -> Self {
        self.dom.data_mut(self.node).text = text.to_string();
        self
    }

    /// Sets the live value only, as typing would.
    pub fn value(self, value: &str) -> Self {
        self.dom.set_value(&self.node, value);
        self
    }

    pub fn layout(self, rect: Rect) -> Self {
        self.dom.set_layout(self.node, rect);
        self
    }

    pub fn finish(self) -> NodeId {
        self.node
    }
}
