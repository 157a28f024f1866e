//! Small helpers shared by the widgets.

use std::time::Duration;

use sawaed_dom::{Dom, Scheduler, TaskHandle};

const RLM: char = '\u{200f}';
const NBSP: char = '\u{a0}';
const GROUP_SEP: char = '\u{066c}';
const DECIMAL_SEP: char = '\u{066b}';

fn arabic_indic(digit: char) -> char {
    match digit.to_digit(10) {
        Some(d) => char::from_u32(0x0660 + d).unwrap_or(digit),
        None => digit,
    }
}

/// Egyptian pounds in Arabic (Egypt) notation: `1500` becomes
/// `"\u{200f}١٬٥٠٠٫٠٠\u{a0}ج.م.\u{200f}"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::new();
    out.push(RLM);
    if amount < 0.0 && fixed != "0.00" {
        out.push('-');
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(arabic_indic(c));
    }
    out.push(DECIMAL_SEP);
    out.extend(frac_part.chars().map(arabic_indic));
    out.push(NBSP);
    out.push_str("ج.م.");
    out.push(RLM);
    out
}

/// Groups an 11-digit number as `0101 234 5678`; anything else is returned
/// unchanged. Non-digits are ignored when counting.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return phone.to_string();
    }
    format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..])
}

/// Whether `node` lies entirely inside the viewport.
pub fn is_in_viewport<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.viewport().contains(&dom.bounding_rect(node))
}

/// Trailing-edge debounce over the host scheduler.
///
/// Each [`trigger`](Self::trigger) replaces the pending task, so the task
/// runs once, `wait` after the last trigger.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<TaskHandle>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn trigger<N: PartialEq, T>(&mut self, scheduler: &mut Scheduler<N, T>, task: T) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.pending = Some(scheduler.schedule(self.wait, task));
    }

    /// Call when the debounced task runs.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
