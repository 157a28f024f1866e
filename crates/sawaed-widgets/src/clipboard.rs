//! Click-to-copy for account and phone numbers.
//!
//! A click copies the element's trimmed text through the primary backend,
//! then the fallback backend, and attaches a short-lived notice next to the
//! element saying whether it worked. A backend may settle later (the browser
//! clipboard answers with a promise); its result comes back through
//! [`CopyCompletions`] and is picked up by [`CopyToClipboard::poll`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use sawaed_common::{Notice, PlatformError};
use sawaed_config::schema::{MessagesConfig, TimingConfig};
use sawaed_dom::{Bindings, Dom, Role, Scheduler};
use tracing::{debug, warn};

/// Somewhere text can be copied to.
pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn set_text(&mut self, text: &str) -> Result<CopyStatus, PlatformError>;
}

/// How a backend took the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    /// Reported later through [`CopyCompletions::settle`].
    Pending(CopyTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Results of copies that settle after `set_text` returned.
///
/// Cloning shares the queue, so a backend holds one handle and the widget
/// another.
#[derive(Debug, Clone, Default)]
pub struct CopyCompletions {
    inner: Rc<RefCell<Settled>>,
}

#[derive(Debug, Default)]
struct Settled {
    issued: u64,
    results: VecDeque<(CopyTicket, Result<(), PlatformError>)>,
}

impl CopyCompletions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> CopyTicket {
        let mut inner = self.inner.borrow_mut();
        inner.issued += 1;
        CopyTicket(inner.issued)
    }

    pub fn settle(&self, ticket: CopyTicket, result: Result<(), PlatformError>) {
        self.inner.borrow_mut().results.push_back((ticket, result));
    }

    fn take(&self) -> Vec<(CopyTicket, Result<(), PlatformError>)> {
        self.inner.borrow_mut().results.drain(..).collect()
    }
}

/// The operating system clipboard, backed by `arboard`.
#[cfg(not(target_arch = "wasm32"))]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> Result<CopyStatus, PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map(|()| CopyStatus::Copied)
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// Deferred steps of a copy notice.
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeTask<N> {
    Show { notice: N },
    Fade { notice: N },
    Remove { notice: N },
}

const NOTICE_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("color", "white"),
    ("padding", "0.5rem 1rem"),
    ("border-radius", "4px"),
    ("font-size", "0.85rem"),
    ("margin-right", "1rem"),
    ("opacity", "0"),
    ("transition", "opacity 0.3s ease"),
    ("z-index", "1000"),
];

enum Attempt {
    Copied(&'static str),
    Pending { ticket: CopyTicket, backend: &'static str, next: usize },
    Failed(PlatformError),
}

struct Waiting<N> {
    ticket: CopyTicket,
    backend: &'static str,
    element: N,
    text: String,
    next: usize,
}

pub struct CopyToClipboard<N> {
    primary: Option<Box<dyn ClipboardBackend>>,
    fallback: Option<Box<dyn ClipboardBackend>>,
    completions: CopyCompletions,
    waiting: Vec<Waiting<N>>,
    messages: MessagesConfig,
    show_delay: Duration,
    notice_ttl: Duration,
    fade: Duration,
}

impl<N: Clone + PartialEq> CopyToClipboard<N> {
    pub fn new(messages: MessagesConfig, timing: &TimingConfig) -> Self {
        Self {
            primary: None,
            fallback: None,
            completions: CopyCompletions::new(),
            waiting: Vec::new(),
            messages,
            show_delay: timing.fade_in_delay(),
            notice_ttl: timing.copy_notice(),
            fade: timing.fade(),
        }
    }

    pub fn with_primary(mut self, backend: Box<dyn ClipboardBackend>) -> Self {
        self.primary = Some(backend);
        self
    }

    pub fn with_fallback(mut self, backend: Box<dyn ClipboardBackend>) -> Self {
        self.fallback = Some(backend);
        self
    }

    /// Handle for backends that settle asynchronously.
    pub fn completions(&self) -> CopyCompletions {
        self.completions.clone()
    }

    /// Copies waiting on a backend to settle.
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Marks every copyable element as clickable.
    pub fn prepare<D: Dom>(&self, dom: &mut D, bindings: &Bindings) -> usize {
        let elements = bindings.resolve_all(dom, Role::Copyable);
        for element in &elements {
            dom.set_style(element, "cursor", "pointer");
            dom.set_attribute(element, "title", &self.messages.copy_hint);
        }
        elements.len()
    }

    /// Tries backends from slot `from` (0 primary, 1 fallback) until one
    /// copies or goes pending. `last` is reported if none is left to try.
    fn attempt(&mut self, text: &str, from: usize, mut last: PlatformError) -> Attempt {
        for (slot, backend) in [self.primary.as_mut(), self.fallback.as_mut()]
            .into_iter()
            .enumerate()
            .skip(from)
        {
            let Some(backend) = backend else {
                continue;
            };
            match backend.set_text(text) {
                Ok(CopyStatus::Copied) => return Attempt::Copied(backend.name()),
                Ok(CopyStatus::Pending(ticket)) => {
                    return Attempt::Pending {
                        ticket,
                        backend: backend.name(),
                        next: slot + 1,
                    }
                }
                Err(e) => {
                    debug!(backend = backend.name(), "copy failed: {e}");
                    last = e;
                }
            }
        }
        Attempt::Failed(last)
    }

    /// Click on a copyable element. Returns `false` for other targets.
    pub fn handle_click<D, T>(
        &mut self,
        dom: &mut D,
        bindings: &Bindings,
        scheduler: &mut Scheduler<N, T>,
        target: &N,
    ) -> bool
    where
        D: Dom<Node = N>,
        T: From<NoticeTask<N>>,
    {
        let Some(element) = bindings.closest(dom, target, Role::Copyable) else {
            return false;
        };
        let text = dom.text_content(&element).trim().to_string();
        let attempt = self.attempt(
            &text,
            0,
            PlatformError::NotSupported("no clipboard backend".into()),
        );
        self.conclude(dom, scheduler, element, text, attempt);
        true
    }

    /// Finishes copies whose backend settled since the last call. A rejected
    /// copy moves on to the next backend. Returns how many settled.
    pub fn poll<D, T>(&mut self, dom: &mut D, scheduler: &mut Scheduler<N, T>) -> usize
    where
        D: Dom<Node = N>,
        T: From<NoticeTask<N>>,
    {
        let mut settled = 0;
        for (ticket, result) in self.completions.take() {
            let Some(at) = self.waiting.iter().position(|w| w.ticket == ticket) else {
                debug!(?ticket, "settled copy is not waiting");
                continue;
            };
            let Waiting {
                backend,
                element,
                text,
                next,
                ..
            } = self.waiting.swap_remove(at);
            settled += 1;
            let attempt = match result {
                Ok(()) => Attempt::Copied(backend),
                Err(e) => {
                    debug!(backend, "copy rejected: {e}");
                    self.attempt(&text, next, e)
                }
            };
            self.conclude(dom, scheduler, element, text, attempt);
        }
        settled
    }

    fn conclude<D, T>(
        &mut self,
        dom: &mut D,
        scheduler: &mut Scheduler<N, T>,
        element: N,
        text: String,
        attempt: Attempt,
    ) where
        D: Dom<Node = N>,
        T: From<NoticeTask<N>>,
    {
        let notice = match attempt {
            Attempt::Copied(backend) => {
                debug!(backend, "copied to clipboard");
                Notice::success(&self.messages.copy_success, self.notice_ttl)
            }
            Attempt::Pending {
                ticket,
                backend,
                next,
            } => {
                self.waiting.push(Waiting {
                    ticket,
                    backend,
                    element,
                    text,
                    next,
                });
                return;
            }
            Attempt::Failed(e) => {
                warn!("copy to clipboard failed: {e}");
                Notice::failure(&self.messages.copy_failure, self.notice_ttl)
            }
        };
        self.show_notice(dom, scheduler, &element, &notice);
    }

    fn show_notice<D, T>(
        &self,
        dom: &mut D,
        scheduler: &mut Scheduler<N, T>,
        element: &N,
        notice: &Notice,
    ) where
        D: Dom<Node = N>,
        T: From<NoticeTask<N>>,
    {
        let Some(parent) = dom.parent(element) else {
            return;
        };
        let node = dom.create_element("span");
        dom.set_text_content(&node, &notice.text);
        dom.set_styles(&node, NOTICE_STYLE);
        dom.set_style(&node, "background", notice.level.background());
        dom.set_style(&parent, "position", "relative");
        dom.append_child(&parent, &node);

        scheduler.schedule_owned(
            self.show_delay,
            node.clone(),
            NoticeTask::Show {
                notice: node.clone(),
            }
            .into(),
        );
        scheduler.schedule_owned(
            notice.ttl,
            node.clone(),
            NoticeTask::Fade {
                notice: node.clone(),
            }
            .into(),
        );
    }

    pub fn run<D, T>(&self, dom: &mut D, scheduler: &mut Scheduler<N, T>, task: NoticeTask<N>)
    where
        D: Dom<Node = N>,
        T: From<NoticeTask<N>>,
    {
        match task {
            NoticeTask::Show { notice } if dom.is_connected(&notice) => {
                dom.set_style(&notice, "opacity", "1");
            }
            NoticeTask::Fade { notice } if dom.is_connected(&notice) => {
                dom.set_style(&notice, "opacity", "0");
                scheduler.schedule_owned(
                    self.fade,
                    notice.clone(),
                    NoticeTask::Remove { notice }.into(),
                );
            }
            NoticeTask::Remove { notice } if dom.is_connected(&notice) => {
                dom.remove(&notice);
            }
            _ => {}
        }
    }
}
