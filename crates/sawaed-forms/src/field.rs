//! Form controls as seen by the validator.

use sawaed_dom::Dom;
use serde::Serialize;

/// Declared type of a control, from its tag and `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Select,
    TextArea,
    /// Any other input type (date, radio, ...). Only the required rule applies.
    Other,
}

impl FieldKind {
    /// `type_attr` is ignored for everything but `<input>`, which defaults to text.
    pub fn from_element(tag: &str, type_attr: Option<&str>) -> Self {
        match tag {
            "select" => Self::Select,
            "textarea" => Self::TextArea,
            "input" => match type_attr.map(str::to_ascii_lowercase).as_deref() {
                None | Some("") | Some("text") => Self::Text,
                Some("email") => Self::Email,
                Some("tel") => Self::Tel,
                Some("number") => Self::Number,
                Some(_) => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// A numeric bound as written on the control, with its parsed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bound {
    pub raw: String,
    /// `None` when the attribute text is not a number; such a bound never fails.
    pub value: Option<f64>,
}

impl Bound {
    /// An empty attribute declares no bound.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            value: parse_float(raw),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    pub required: bool,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

/// Snapshot of one control at validation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: FieldKind,
    pub constraints: Constraints,
    /// Raw current value, untrimmed.
    pub value: String,
}

impl Field {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            kind,
            constraints: Constraints::default(),
            value: value.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn min(mut self, raw: &str) -> Self {
        self.constraints.min = Bound::parse(raw);
        self
    }

    pub fn max(mut self, raw: &str) -> Self {
        self.constraints.max = Bound::parse(raw);
        self
    }

    pub fn read<D: Dom>(dom: &D, node: &D::Node) -> Self {
        let tag = dom.tag_name(node);
        let kind = FieldKind::from_element(&tag, dom.attribute(node, "type").as_deref());
        let bound = |name| dom.attribute(node, name).and_then(|raw| Bound::parse(&raw));
        Self {
            id: dom.attribute(node, "id"),
            name: dom.attribute(node, "name"),
            kind,
            constraints: Constraints {
                required: dom.has_attribute(node, "required"),
                min: bound("min"),
                max: bound("max"),
            },
            value: dom.value(node),
        }
    }

    /// `id`, then `name`, for log lines.
    pub fn label(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// Leading-prefix float parse: `"12abc"` is 12, `"abc"` is `None`.
///
/// Leading whitespace is skipped; the longest prefix that forms a decimal
/// literal (optional sign, digits, fraction, exponent) or `Infinity` is
/// used.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };
    let int_len = digits(i);
    i += int_len;
    let mut frac_len = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_len = digits(i + 1);
        if int_len > 0 || frac_len > 0 {
            i += 1 + frac_len;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_len = digits(j);
        if exp_len > 0 {
            i = j + exp_len;
        }
    }
    s[..i].parse().ok()
}
