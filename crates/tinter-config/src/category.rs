//! The three closed top-level categories of a theme document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinter_common::ThemeError;

/// One of the three top-level groupings of themeable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NodeSlot,
    LitegraphBase,
    ComfyBase,
}

impl Category {
    /// All categories in document order.
    pub const ALL: [Category; 3] = [
        Category::NodeSlot,
        Category::LitegraphBase,
        Category::ComfyBase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::NodeSlot => "node_slot",
            Category::LitegraphBase => "litegraph_base",
            Category::ComfyBase => "comfy_base",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node_slot" => Ok(Category::NodeSlot),
            "litegraph_base" => Ok(Category::LitegraphBase),
            "comfy_base" => Ok(Category::ComfyBase),
            other => Err(ThemeError::UnknownCategory(other.to_string())),
        }
    }
}

/// A `(category, key)` coordinate addressing one field of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldPath {
    pub category: Category,
    pub key: String,
}

impl FieldPath {
    pub fn new(category: Category, key: impl Into<String>) -> Self {
        Self {
            category,
            key: key.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

impl FromStr for FieldPath {
    type Err = ThemeError;

    /// Parses `category.key`. Keys may themselves contain dots or dashes;
    /// only the first dot separates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, key) = s
            .split_once('.')
            .ok_or_else(|| ThemeError::ParseError(format!("expected category.key, got '{s}'")))?;
        if key.is_empty() {
            return Err(ThemeError::ParseError(format!("empty key in '{s}'")));
        }
        Ok(Self::new(category.parse()?, key))
    }
}
