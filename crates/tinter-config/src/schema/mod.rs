//! Application configuration schema.
//!
//! All structs use `serde(default)` so partial configs work.

mod ai;
mod editor;
mod system;

pub use ai::*;
pub use editor::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration, read from `tinter.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TinterConfig {
    pub ai: AiConfig,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}
