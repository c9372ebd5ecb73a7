//! Key-set comparison between two documents.
//!
//! Used to hold an externally produced document to the exact field set of
//! the document it was derived from.

use std::sync::Arc;

use indexmap::IndexMap;

use super::types::ThemeDocument;
use crate::category::{Category, FieldPath};

/// The first difference found between an expected and an actual key set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeMismatch {
    /// A field of the expected document is absent.
    #[error("missing field {0}")]
    Missing(FieldPath),
    /// A field not present in the expected document was added.
    #[error("unexpected field {0}")]
    Unexpected(FieldPath),
}

impl ThemeDocument {
    /// Compare `candidate`'s key sets against `self`. Order is ignored.
    pub fn shape_mismatch(&self, candidate: &ThemeDocument) -> Option<ShapeMismatch> {
        for category in Category::ALL {
            for key in self.keys(category) {
                if !candidate.contains(category, key) {
                    return Some(ShapeMismatch::Missing(FieldPath::new(category, key)));
                }
            }
            for key in candidate.keys(category) {
                if !self.contains(category, key) {
                    return Some(ShapeMismatch::Unexpected(FieldPath::new(category, key)));
                }
            }
        }
        None
    }

    /// Reorder every category of `self` to follow `template`'s key order.
    /// Keys unknown to the template keep their relative order at the end.
    pub fn conformed_to(self, template: &ThemeDocument) -> ThemeDocument {
        let ThemeDocument { id, name, mut colors } = self;
        colors.node_slot = Arc::new(reorder(
            unwrap_or_clone(colors.node_slot),
            template.colors.node_slot.keys(),
        ));
        colors.litegraph_base = Arc::new(reorder(
            unwrap_or_clone(colors.litegraph_base),
            template.colors.litegraph_base.keys(),
        ));
        colors.comfy_base = Arc::new(reorder(
            unwrap_or_clone(colors.comfy_base),
            template.colors.comfy_base.keys(),
        ));
        ThemeDocument { id, name, colors }
    }
}

fn unwrap_or_clone<T: Clone>(arc: Arc<T>) -> T {
    Arc::try_unwrap(arc).unwrap_or_else(|shared| (*shared).clone())
}

fn reorder<'a, V>(
    mut map: IndexMap<String, V>,
    order: impl Iterator<Item = &'a String>,
) -> IndexMap<String, V> {
    let mut out = IndexMap::with_capacity(map.len());
    for key in order {
        if let Some(value) = map.shift_remove(key) {
            out.insert(key.clone(), value);
        }
    }
    out.extend(map);
    out
}
