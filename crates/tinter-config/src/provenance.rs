//! Whether the current document is an unmodified preset or a custom one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The literal used for non-preset documents in the preset selector.
pub const CUSTOM: &str = "custom";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Loaded from the catalog and not edited since.
    Preset(String),
    /// Edited, imported, or produced by a transform.
    Custom,
}

impl Provenance {
    pub fn preset(id: impl Into<String>) -> Self {
        Provenance::Preset(id.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Provenance::Custom)
    }

    pub fn preset_id(&self) -> Option<&str> {
        match self {
            Provenance::Preset(id) => Some(id),
            Provenance::Custom => None,
        }
    }

    /// Provenance after any direct field edit.
    pub fn after_edit(&self) -> Self {
        Provenance::Custom
    }

    /// The selector value: the preset id, or `"custom"`.
    pub fn as_str(&self) -> &str {
        match self {
            Provenance::Preset(id) => id,
            Provenance::Custom => CUSTOM,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
