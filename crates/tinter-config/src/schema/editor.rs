use serde::{Deserialize, Serialize};

use crate::presets::DEFAULT_PRESET;

/// Editor session timings and startup preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub default_preset: String,
    /// How long a selected field stays highlighted.
    pub highlight_ms: u64,
    /// Delay between a tab switch and scrolling the row into view.
    pub scroll_delay_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_preset: DEFAULT_PRESET.into(),
            highlight_ms: 2000,
            scroll_delay_ms: 100,
        }
    }
}
