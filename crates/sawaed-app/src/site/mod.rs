//! The site runtime.
//!
//! The host forwards page events to [`Site::handle`] and drives the clock
//! with [`Site::tick`]; everything else happens through the `Dom` backend.

mod core;
mod event_handler;
mod init;
mod tasks;

#[cfg(test)]
mod tests;

pub use self::core::Site;
pub use self::tasks::SiteTask;
