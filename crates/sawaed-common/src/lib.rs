//! Shared vocabulary for the Sawa'ed Al-Khair site runtime.
//!
//! Error taxonomy, host page events, transient notices, geometry and ids
//! used by every other crate in the workspace.

pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, PlatformError, SiteError};
pub use events::{EventOutcome, PageEvent};
pub use id::new_correlation_id;
pub use notifications::{Notice, NoticeLevel};
pub use types::{Rect, Viewport};

pub type Result<T> = std::result::Result<T, SiteError>;
