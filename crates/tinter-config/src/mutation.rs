//! Single-field edits that never touch the input document.

use std::sync::Arc;

use tracing::debug;

use crate::category::Category;
use crate::document::{ThemeDocument, ThemeValue};

/// Return a copy of `document` with `category.key` set to `value`.
///
/// An existing key keeps its position; a new key is appended to the end
/// of the category. Only the targeted category is copied, the other two
/// stay shared with `document`. The value is stored verbatim: color
/// syntax is not checked here. The one exception: a numeric
/// `litegraph_base` field stays numeric when the new text is a number.
pub fn apply_edit(
    document: &ThemeDocument,
    category: Category,
    key: &str,
    value: impl Into<String>,
) -> ThemeDocument {
    let value = value.into();
    let mut next = document.clone();

    match category {
        Category::NodeSlot => {
            Arc::make_mut(&mut next.colors.node_slot).insert(key.to_string(), value);
        }
        Category::LitegraphBase => {
            let fields = Arc::make_mut(&mut next.colors.litegraph_base);
            let keep_numeric = matches!(fields.get(key), Some(ThemeValue::Number(_)));
            let value = match value.trim().parse::<serde_json::Number>() {
                Ok(n) if keep_numeric => ThemeValue::Number(n),
                _ => ThemeValue::Text(value),
            };
            fields.insert(key.to_string(), value);
        }
        Category::ComfyBase => {
            Arc::make_mut(&mut next.colors.comfy_base).insert(key.to_string(), value);
        }
    }

    debug!(%category, key, "applied field edit");
    next
}
