//! `tinter.toml` loading and first-run creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{app_config_dir, create_default_config, default_config_path};
