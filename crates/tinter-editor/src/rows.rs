//! Editor rows: one color control per editable field of a tab.

use serde::Serialize;
use tinter_config::colors::picker_hex;
use tinter_config::keys::is_non_color_field;
use tinter_config::{Category, ThemeDocument};
use tinter_preview::{row_id, EditorTab};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorRow {
    /// `input-{key}`, the scroll target id.
    pub id: String,
    pub key: String,
    pub label: String,
    /// Stored value, verbatim.
    pub value: String,
    /// The value as the color picker shows it.
    pub picker_hex: String,
    pub highlighted: bool,
}

/// Rows for `tab` in document order. Numeric values and the non-color
/// graph fields get no row; the JSON tab has none at all.
pub fn rows_for(document: &ThemeDocument, tab: EditorTab, highlighted: Option<&str>) -> Vec<EditorRow> {
    let Some(category) = tab.category() else {
        return Vec::new();
    };

    document
        .entries(category)
        .into_iter()
        .filter(|(key, _)| !is_non_color_field(category, key))
        .filter_map(|(key, value)| {
            let value = value.as_color()?;
            Some(EditorRow {
                id: row_id(key),
                key: key.to_string(),
                label: label_for(category, key),
                value: value.to_string(),
                picker_hex: picker_hex(value),
                highlighted: highlighted == Some(key),
            })
        })
        .collect()
}

/// Whether `key` gets a row on its category's tab.
pub fn has_row(document: &ThemeDocument, category: Category, key: &str) -> bool {
    !is_non_color_field(category, key) && document.color(category, key).is_some()
}

fn label_for(category: Category, key: &str) -> String {
    match category {
        Category::LitegraphBase => key.replace('_', " "),
        Category::NodeSlot | Category::ComfyBase => key.to_string(),
    }
}
