//! Floating "back to top" button.

use sawaed_dom::Dom;

pub const BUTTON_CLASS: &str = "back-to-top";
const REST_BACKGROUND: &str = "#2e7d32";
const HOVER_BACKGROUND: &str = "#1b5e20";

const BUTTON_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "2rem"),
    ("left", "2rem"),
    ("width", "50px"),
    ("height", "50px"),
    ("background", REST_BACKGROUND),
    ("color", "white"),
    ("border", "none"),
    ("border-radius", "50%"),
    ("font-size", "1.5rem"),
    ("cursor", "pointer"),
    ("opacity", "0"),
    ("visibility", "hidden"),
    ("transition", "all 0.3s ease"),
    ("z-index", "999"),
    ("box-shadow", "0 4px 8px rgba(0,0,0,0.15)"),
];

#[derive(Debug, Clone)]
pub struct BackToTop<N> {
    threshold: f64,
    label: String,
    button: Option<N>,
}

impl<N: Clone + PartialEq> BackToTop<N> {
    pub fn new(threshold: f64, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
            button: None,
        }
    }

    pub fn button(&self) -> Option<&N> {
        self.button.as_ref()
    }

    /// Creates the hidden button at the end of the body.
    pub fn mount<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        if self.button.is_some() {
            return;
        }
        let button = dom.create_element("button");
        dom.set_text_content(&button, "↑");
        dom.add_class(&button, BUTTON_CLASS);
        dom.set_attribute(&button, "aria-label", &self.label);
        dom.set_styles(&button, BUTTON_STYLE);
        let body = dom.body();
        dom.append_child(&body, &button);
        self.button = Some(button);
    }

    fn hit<D: Dom<Node = N>>(&self, dom: &D, target: &N) -> Option<N> {
        self.button
            .as_ref()
            .filter(|b| dom.contains(b, target))
            .cloned()
    }

    pub fn handle_scroll<D: Dom<Node = N>>(&self, dom: &mut D) {
        let Some(button) = self.button.clone() else {
            return;
        };
        if dom.scroll_y() > self.threshold {
            dom.set_styles(&button, &[("opacity", "1"), ("visibility", "visible")]);
        } else {
            dom.set_styles(&button, &[("opacity", "0"), ("visibility", "hidden")]);
        }
    }

    pub fn handle_click<D: Dom<Node = N>>(&self, dom: &mut D, target: &N) -> bool {
        if self.hit(dom, target).is_none() {
            return false;
        }
        dom.scroll_to(0.0, true);
        true
    }

    pub fn handle_hover<D: Dom<Node = N>>(&self, dom: &mut D, target: &N, entering: bool) {
        let Some(button) = self.hit(dom, target) else {
            return;
        };
        if entering {
            dom.set_styles(
                &button,
                &[("background", HOVER_BACKGROUND), ("transform", "translateY(-3px)")],
            );
        } else {
            dom.set_styles(
                &button,
                &[("background", REST_BACKGROUND), ("transform", "translateY(0)")],
            );
        }
    }
}
