//! The page as an external collaborator.

use std::fmt;

use sawaed_common::{Rect, Viewport};

/// Read/write access to the document and its window.
///
/// `Node` is the backend's element handle: an arena index for
/// [`MemoryDom`](crate::MemoryDom), a `web_sys::Element` in the browser.
/// Operations on a node that has been removed from the document are
/// no-ops rather than errors, so deferred work can fire safely after its
/// target is gone.
pub trait Dom {
    type Node: Clone + PartialEq + fmt::Debug;

    fn body(&self) -> Self::Node;
    fn head(&self) -> Self::Node;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;
    fn matches(&self, node: &Self::Node, selector: &str) -> bool;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Inclusive: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;
    fn is_connected(&self, node: &Self::Node) -> bool;
    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn create_element(&mut self, tag: &str) -> Self::Node;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    fn insert_after(&mut self, reference: &Self::Node, node: &Self::Node);
    fn remove(&mut self, node: &Self::Node);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    fn text_content(&self, node: &Self::Node) -> String;
    fn set_text_content(&mut self, node: &Self::Node, text: &str);
    /// Current value of a form control; empty for other elements.
    fn value(&self, node: &Self::Node) -> String;
    fn set_value(&mut self, node: &Self::Node, value: &str);
    /// Inline style property, if set.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    fn focus(&mut self, node: &Self::Node);
    /// Restores every control of a form to its default value.
    fn reset_form(&mut self, form: &Self::Node);

    /// Box relative to the viewport.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;
    /// Distance from the top of the document.
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;

    fn viewport(&self) -> Viewport;
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, top: f64, smooth: bool);
    fn open_window(&mut self, url: &str, target: &str);
    fn prefers_reduced_motion(&self) -> bool;

    // -- Provided --------------------------------------------------------

    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node> {
        let mut current = Some(node.clone());
        while let Some(n) = current {
            if self.matches(&n, selector) {
                return Some(n);
            }
            current = self.parent(&n);
        }
        None
    }

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Flips `class` on `node`; returns whether it is now present.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Applies several inline style properties in order.
    fn set_styles(&mut self, node: &Self::Node, styles: &[(&str, &str)]) {
        for (property, value) in styles {
            self.set_style(node, property, value);
        }
    }
}
