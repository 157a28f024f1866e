//! A small CSS selector subset for the in-memory document.
//!
//! Supported: comma-separated groups of compound selectors made of an
//! optional tag (or `*`), `#id`, `.class` and attribute tests `[a]`,
//! `[a=v]`, `[a^=v]`, `[a$=v]`, `[a*=v]` with bare or quoted values.
//! Combinators are not supported; scope queries with
//! [`Dom::query_within`](crate::Dom::query_within) instead.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character {found:?} in selector {selector:?}")]
    Unexpected { selector: String, found: char },

    #[error("unterminated attribute test in selector {0:?}")]
    Unterminated(String),
}

/// What the matcher needs to know about an element.
pub trait SelectorSubject {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attr(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrOp {
    Equals,
    Prefix,
    Suffix,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrTest {
    name: String,
    test: Option<(AttrOp, String)>,
}

impl AttrTest {
    fn matches(&self, subject: &impl SelectorSubject) -> bool {
        let Some(actual) = subject.attr(&self.name) else {
            return false;
        };
        match &self.test {
            None => true,
            Some((AttrOp::Equals, v)) => actual == v,
            Some((AttrOp::Prefix, v)) => !v.is_empty() && actual.starts_with(v.as_str()),
            Some((AttrOp::Suffix, v)) => !v.is_empty() && actual.ends_with(v.as_str()),
            Some((AttrOp::Contains, v)) => !v.is_empty() && actual.contains(v.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

impl Compound {
    fn matches(&self, subject: &impl SelectorSubject) -> bool {
        if let Some(tag) = &self.tag {
            if !subject.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.ids.iter().all(|id| subject.attr("id") == Some(id.as_str()))
            && self.classes.iter().all(|c| subject.has_class(c))
            && self.attrs.iter().all(|a| a.matches(subject))
    }
}

/// A parsed selector group list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    groups: Vec<Compound>,
}

impl SelectorList {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let mut groups = Vec::new();
        for part in selector.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(SelectorError::Empty);
            }
            groups.push(parse_compound(part)?);
        }
        Ok(Self { groups })
    }

    pub fn matches(&self, subject: &impl SelectorSubject) -> bool {
        self.groups.iter().any(|g| g.matches(subject))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        out.push(c);
        chars.next();
    }
    out
}

fn parse_compound(src: &str) -> Result<Compound, SelectorError> {
    let unexpected = |found: char| SelectorError::Unexpected {
        selector: src.to_string(),
        found,
    };
    let mut chars = src.chars().peekable();
    let mut compound = Compound::default();

    match chars.peek() {
        Some('*') => {
            chars.next();
        }
        Some(&c) if is_ident_char(c) => compound.tag = Some(take_ident(&mut chars)),
        _ => {}
    }

    while let Some(c) = chars.next() {
        match c {
            '.' | '#' => {
                let ident = take_ident(&mut chars);
                if ident.is_empty() {
                    return Err(unexpected(c));
                }
                if c == '.' {
                    compound.classes.push(ident);
                } else {
                    compound.ids.push(ident);
                }
            }
            '[' => compound.attrs.push(parse_attr(src, &mut chars)?),
            other => return Err(unexpected(other)),
        }
    }
    Ok(compound)
}

fn parse_attr(src: &str, chars: &mut Peekable<Chars<'_>>) -> Result<AttrTest, SelectorError> {
    let unterminated = || SelectorError::Unterminated(src.to_string());
    let name = take_ident(chars);
    if name.is_empty() {
        return Err(unterminated());
    }
    let op = match chars.next() {
        Some(']') => return Ok(AttrTest { name, test: None }),
        Some('=') => AttrOp::Equals,
        Some(c @ ('^' | '$' | '*')) => {
            if chars.next() != Some('=') {
                return Err(unterminated());
            }
            match c {
                '^' => AttrOp::Prefix,
                '$' => AttrOp::Suffix,
                _ => AttrOp::Contains,
            }
        }
        _ => return Err(unterminated()),
    };
    let value = match chars.peek() {
        Some(&q @ ('"' | '\'')) => {
            chars.next();
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some(c) if c == q => break,
                    Some(c) => value.push(c),
                    None => return Err(unterminated()),
                }
            }
            value
        }
        _ => take_ident(chars),
    };
    if chars.next() != Some(']') {
        return Err(unterminated());
    }
    Ok(AttrTest {
        name,
        test: Some((op, value)),
    })
}
