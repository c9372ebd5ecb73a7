//! Theme document model and configuration for Tinter.
//!
//! Holds the ComfyUI color-theme document (three closed categories of
//! ordered, open-ended key sets), the built-in preset catalog, the
//! immutable field-edit engine, color parsing for input boundaries, and the
//! TOML application config.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tinter_config::{apply_edit, presets, Category};
//!
//! let dark = presets::load("dark").expect("dark preset");
//! let edited = apply_edit(&dark, Category::NodeSlot, "MODEL", "#123456");
//! println!("{}", edited.to_json().expect("serializable"));
//! ```

pub mod category;
pub mod colors;
pub mod document;
pub mod files;
pub mod keys;
pub mod mutation;
pub mod presets;
pub mod provenance;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use category::{Category, FieldPath};
pub use document::{ColorBundle, ShapeMismatch, ThemeDocument, ThemeValue, ValueRef};
pub use mutation::apply_edit;
pub use presets::PresetInfo;
pub use provenance::Provenance;
pub use schema::{TinterConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use tinter_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`
/// (creating a commented default file on first run).
///
/// Out-of-range values do not fail the load: the file is used as parsed.
/// Callers report them with [`validation::validate`] once logging is up.
pub fn load_config(path: Option<&Path>) -> Result<TinterConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
