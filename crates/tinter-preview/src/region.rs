//! Region and paint types.

use std::fmt;

use serde::Serialize;
use tinter_config::{Category, FieldPath};

/// A visual property a region takes from a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProp {
    Background,
    Foreground,
    Border,
    Stroke,
    Shadow,
    FontSize,
    GridLine,
    CornerRadius,
}

impl StyleProp {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleProp::Background => "background",
            StyleProp::Foreground => "foreground",
            StyleProp::Border => "border",
            StyleProp::Stroke => "stroke",
            StyleProp::Shadow => "shadow",
            StyleProp::FontSize => "font_size",
            StyleProp::GridLine => "grid_line",
            StyleProp::CornerRadius => "corner_radius",
        }
    }
}

impl fmt::Display for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paint {
    pub prop: StyleProp,
    pub source: FieldPath,
}

/// One clickable preview region.
///
/// Built with [`RegionSpec::new`], which makes the clicked field the first
/// paint, so the target is always one of the region's paint sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSpec {
    pub id: String,
    pub label: String,
    pub target: FieldPath,
    pub paints: Vec<Paint>,
}

impl RegionSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>, prop: StyleProp, target: FieldPath) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            paints: vec![Paint {
                prop,
                source: target.clone(),
            }],
            target,
        }
    }

    /// Add a non-target paint.
    pub fn paint(mut self, prop: StyleProp, source: FieldPath) -> Self {
        self.paints.push(Paint { prop, source });
        self
    }

    pub fn paints_from(&self, field: &FieldPath) -> bool {
        self.paints.iter().any(|p| &p.source == field)
    }
}

pub(crate) fn graph(key: &str) -> FieldPath {
    FieldPath::new(Category::LitegraphBase, key)
}

pub(crate) fn chrome(key: &str) -> FieldPath {
    FieldPath::new(Category::ComfyBase, key)
}

pub(crate) fn slot(key: &str) -> FieldPath {
    FieldPath::new(Category::NodeSlot, key)
}
