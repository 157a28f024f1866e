//! TOML config loading and default file creation.

mod loader;
mod template;


pub use loader::{load_from_path, load_from_str};
pub use template::{create_default_config, default_config_toml};
