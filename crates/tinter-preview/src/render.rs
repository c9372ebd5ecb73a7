//! Resolve a region table's paints against a document.

use serde::Serialize;
use tinter_config::{FieldPath, ThemeDocument, ValueRef};
use tracing::debug;

use crate::region::StyleProp;
use crate::table::RegionTable;

/// Corner radius for nodes unless `NODE_DEFAULT_SHAPE` selects boxes.
const ROUND_RADIUS: &str = "8px";
const BOX_SHAPE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub prop: StyleProp,
    pub source: FieldPath,
    /// Concrete style value. Colors pass through verbatim, malformed or not.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRegion {
    pub id: String,
    pub label: String,
    pub target: FieldPath,
    pub styles: Vec<ResolvedStyle>,
}

impl RenderedRegion {
    pub fn style(&self, prop: StyleProp) -> Option<&str> {
        self.styles
            .iter()
            .find(|s| s.prop == prop)
            .map(|s| s.value.as_str())
    }
}

/// Render every region of the preview for `document`.
pub fn render(document: &ThemeDocument) -> Vec<RenderedRegion> {
    render_with(&RegionTable::for_document(document), document)
}

/// Render with a prebuilt table. Paints whose source field is absent are
/// skipped.
pub fn render_with(table: &RegionTable, document: &ThemeDocument) -> Vec<RenderedRegion> {
    table
        .iter()
        .map(|region| RenderedRegion {
            id: region.id.clone(),
            label: region.label.clone(),
            target: region.target.clone(),
            styles: region
                .paints
                .iter()
                .filter_map(|paint| {
                    let Some(value) = document.get(paint.source.category, &paint.source.key) else {
                        debug!(region = %region.id, source = %paint.source, "paint source missing");
                        return None;
                    };
                    Some(ResolvedStyle {
                        prop: paint.prop,
                        source: paint.source.clone(),
                        value: style_value(paint.prop, value),
                    })
                })
                .collect(),
        })
        .collect()
}

fn style_value(prop: StyleProp, value: ValueRef<'_>) -> String {
    match (prop, value) {
        (StyleProp::CornerRadius, v) if v.as_f64() == Some(BOX_SHAPE) => "0px".to_string(),
        (StyleProp::CornerRadius, _) => ROUND_RADIUS.to_string(),
        (StyleProp::FontSize, ValueRef::Number(n)) => format!("{n}px"),
        (_, v) => v.to_string(),
    }
}
