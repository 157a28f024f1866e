//! Site runtime for the Sawa'ed Al-Khair pages.
//!
//! [`Site`] owns the page backend, the session store, the scheduler and
//! every behavior, and routes host events to them. In the browser the
//! `SawaedSite` wasm export drives a `Site` over the live document; tests
//! and headless hosts drive one over [`sawaed_dom::MemoryDom`].

pub mod logging;
pub mod site;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use site::{Site, SiteTask};

#[cfg(target_arch = "wasm32")]
pub use wasm::SawaedSite;

/// Native builds have no browser entry point.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct SawaedSite;
