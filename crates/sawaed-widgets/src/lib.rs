//! Independent page widgets.
//!
//! Each widget owns no page state of its own beyond what it created; it
//! resolves its elements through [`Bindings`](sawaed_dom::Bindings) on every
//! event and ignores events whose target is not one of them. Deferred work
//! is expressed as a task enum scheduled on the site's scheduler.

pub mod back_to_top;
pub mod clipboard;
pub mod donation;
pub mod filter_tabs;
pub mod menu;
pub mod scroll_animations;
pub mod smooth_scroll;
pub mod utils;

pub use back_to_top::BackToTop;
#[cfg(not(target_arch = "wasm32"))]
pub use clipboard::SystemClipboard;
pub use clipboard::{
    ClipboardBackend, CopyCompletions, CopyStatus, CopyTicket, CopyToClipboard, NoticeTask,
};
pub use donation::DonationSelector;
pub use filter_tabs::{FadeTask, FilterTabs};
pub use menu::MobileMenu;
pub use scroll_animations::{RevealTask, ScrollAnimations};
pub use smooth_scroll::SmoothScroll;
pub use utils::{format_currency, format_phone_number, is_in_viewport, Debouncer};
