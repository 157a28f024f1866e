//! Page access for the site runtime.
//!
//! Behaviors never touch a browser API directly. They go through:
//! - [`Dom`]: the page structure as a read/write collaborator,
//! - [`Bindings`]: the explicit role → selector contract with the markup,
//! - [`SessionStore`]: session-scoped key/value storage,
//! - [`Scheduler`]: host-driven deferred tasks with cancellation.
//!
//! [`MemoryDom`] and [`MemoryStore`] back tests and headless hosts; the
//! `browser` module (wasm32 only) backs the real page.

pub mod bindings;
pub mod dom;
pub mod memory;
pub mod scheduler;
pub mod selector;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use bindings::{BindingReport, Bindings, Role};
pub use dom::Dom;
pub use memory::{ElementBuilder, MemoryDom, NodeId, ScrollRequest};
pub use scheduler::{Scheduler, TaskHandle};
pub use selector::{SelectorError, SelectorList};
pub use storage::{MemoryStore, SessionStore};
