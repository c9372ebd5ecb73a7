//! Field → editor tab routing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinter_config::Category;

/// Editor tabs. Every category maps to exactly one; `Json` shows the raw
/// document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    #[default]
    Slots,
    Graph,
    Ui,
    Json,
}

impl EditorTab {
    pub const ALL: [EditorTab; 4] = [
        EditorTab::Slots,
        EditorTab::Graph,
        EditorTab::Ui,
        EditorTab::Json,
    ];

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::NodeSlot => EditorTab::Slots,
            Category::LitegraphBase => EditorTab::Graph,
            Category::ComfyBase => EditorTab::Ui,
        }
    }

    /// The category edited on this tab; `None` for the JSON view.
    pub fn category(self) -> Option<Category> {
        match self {
            EditorTab::Slots => Some(Category::NodeSlot),
            EditorTab::Graph => Some(Category::LitegraphBase),
            EditorTab::Ui => Some(Category::ComfyBase),
            EditorTab::Json => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditorTab::Slots => "slots",
            EditorTab::Graph => "graph",
            EditorTab::Ui => "ui",
            EditorTab::Json => "json",
        }
    }
}

impl fmt::Display for EditorTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditorTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown editor tab: {s}"))
    }
}

/// DOM-style id of the editor row for `key`.
pub fn row_id(key: &str) -> String {
    format!("input-{key}")
}
