//! Built-in preset catalog.
//!
//! Presets are complete documents embedded as JSON. Every load hands out a
//! detached deep copy, so editing a loaded document can never reach the
//! catalog or another loaded copy.

use std::sync::LazyLock;

use serde::Serialize;
use tinter_common::ThemeError;
use tracing::{error, info};

use crate::document::ThemeDocument;

/// Preset loaded when nothing else is requested.
pub const DEFAULT_PRESET: &str = "dark";

/// Embedded preset sources in selector order.
const SOURCES: &[(&str, &str)] = &[
    ("dark", include_str!("../../presets/dark.json")),
    ("light", include_str!("../../presets/light.json")),
    ("solarized", include_str!("../../presets/solarized.json")),
    ("nord", include_str!("../../presets/nord.json")),
];

static CATALOG: LazyLock<Vec<ThemeDocument>> = LazyLock::new(|| {
    SOURCES
        .iter()
        .filter_map(|(id, json)| match ThemeDocument::from_json(json) {
            Ok(doc) => Some(doc),
            Err(e) => {
                error!(preset = id, error = %e, "built-in preset failed to parse");
                None
            }
        })
        .collect()
});

/// Selector entry for a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub id: String,
    pub name: String,
}

/// All presets in fixed selector order.
pub fn list() -> Vec<PresetInfo> {
    CATALOG
        .iter()
        .map(|doc| PresetInfo {
            id: doc.id.clone(),
            name: doc.name.clone(),
        })
        .collect()
}

/// Whether `id` names a built-in preset.
pub fn contains(id: &str) -> bool {
    CATALOG.iter().any(|doc| doc.id == id)
}

/// A fresh, unshared copy of the preset `id`.
pub fn load(id: &str) -> Result<ThemeDocument, ThemeError> {
    let doc = CATALOG
        .iter()
        .find(|doc| doc.id == id)
        .ok_or_else(|| ThemeError::UnknownPreset(id.to_string()))?;
    info!(preset = id, "loaded preset");
    Ok(doc.detached())
}

/// The id of the preset equal by value to `document`, if any.
pub fn identify(document: &ThemeDocument) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|doc| *doc == document)
        .map(|doc| doc.id.as_str())
}

/// The raw embedded JSON of a preset.
pub fn source(id: &str) -> Option<&'static str> {
    SOURCES
        .iter()
        .find(|(source_id, _)| *source_id == id)
        .map(|(_, json)| *json)
}
