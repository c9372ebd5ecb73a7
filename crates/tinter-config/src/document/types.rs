//! Document, bundle, and value types plus their accessors.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tinter_common::ThemeError;

use crate::category::Category;
use crate::keys::required_keys;

/// `node_slot`: data-type name → color. Open-ended.
pub type SlotColors = IndexMap<String, String>;

/// `litegraph_base`: canvas style property → color or numeric parameter.
pub type GraphStyle = IndexMap<String, ThemeValue>;

/// `comfy_base`: application-chrome role → color.
pub type ChromeColors = IndexMap<String, String>;

/// A `litegraph_base` value. Anything other than a string or a number is
/// a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Text(String),
    Number(serde_json::Number),
}

impl ThemeValue {
    /// The string form, if this value can go through a color control.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(s) => Some(s),
            ThemeValue::Number(_) => None,
        }
    }

    pub fn view(&self) -> ValueRef<'_> {
        match self {
            ThemeValue::Text(s) => ValueRef::Text(s),
            ThemeValue::Number(n) => ValueRef::Number(n),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Text(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::Text(value)
    }
}

impl From<i64> for ThemeValue {
    fn from(value: i64) -> Self {
        ThemeValue::Number(value.into())
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

/// A borrowed view of any field value, regardless of category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Text(&'a str),
    Number(&'a serde_json::Number),
}

impl<'a> ValueRef<'a> {
    pub fn as_color(&self) -> Option<&'a str> {
        match self {
            ValueRef::Text(s) => Some(s),
            ValueRef::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ValueRef::Number(n) => n.as_f64(),
            ValueRef::Text(_) => None,
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Text(s) => f.write_str(s),
            ValueRef::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Exactly three categories; any other top-level key is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorBundle {
    pub node_slot: Arc<SlotColors>,
    pub litegraph_base: Arc<GraphStyle>,
    pub comfy_base: Arc<ChromeColors>,
}

/// One complete visual style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub id: String,
    pub name: String,
    pub colors: ColorBundle,
}

impl ThemeDocument {
    /// Parse a JSON document and check that every baseline key is present.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        let doc: ThemeDocument = serde_json::from_str(text)
            .map_err(|e| ThemeError::ParseError(format!("invalid theme JSON: {e}")))?;
        doc.check_complete()?;
        Ok(doc)
    }

    /// Parse a YAML document with the same checks as [`Self::from_json`].
    pub fn from_yaml(text: &str) -> Result<Self, ThemeError> {
        let doc: ThemeDocument = serde_yaml::from_str(text)
            .map_err(|e| ThemeError::ParseError(format!("invalid theme YAML: {e}")))?;
        doc.check_complete()?;
        Ok(doc)
    }

    /// Canonical exchange form: two-space indented JSON in document order.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ThemeError::ParseError(format!("failed to serialize theme: {e}")))
    }

    /// Fails with the first baseline key that is absent.
    pub fn check_complete(&self) -> Result<(), ThemeError> {
        for category in Category::ALL {
            for key in required_keys(category) {
                if !self.contains(category, key) {
                    return Err(ThemeError::MissingField {
                        category: category.to_string(),
                        key: (*key).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, category: Category, key: &str) -> bool {
        match category {
            Category::NodeSlot => self.colors.node_slot.contains_key(key),
            Category::LitegraphBase => self.colors.litegraph_base.contains_key(key),
            Category::ComfyBase => self.colors.comfy_base.contains_key(key),
        }
    }

    pub fn get(&self, category: Category, key: &str) -> Option<ValueRef<'_>> {
        match category {
            Category::NodeSlot => self.colors.node_slot.get(key).map(|s| ValueRef::Text(s.as_str())),
            Category::LitegraphBase => self.colors.litegraph_base.get(key).map(ThemeValue::view),
            Category::ComfyBase => self.colors.comfy_base.get(key).map(|s| ValueRef::Text(s.as_str())),
        }
    }

    /// The string value of a field, or `None` if absent or numeric.
    pub fn color(&self, category: Category, key: &str) -> Option<&str> {
        self.get(category, key).and_then(|v| v.as_color())
    }

    /// Keys of a category in document order.
    pub fn keys(&self, category: Category) -> Vec<&str> {
        match category {
            Category::NodeSlot => self.colors.node_slot.keys().map(String::as_str).collect(),
            Category::LitegraphBase => self
                .colors
                .litegraph_base
                .keys()
                .map(String::as_str)
                .collect(),
            Category::ComfyBase => self.colors.comfy_base.keys().map(String::as_str).collect(),
        }
    }

    /// `(key, value)` pairs of a category in document order.
    pub fn entries(&self, category: Category) -> Vec<(&str, ValueRef<'_>)> {
        match category {
            Category::NodeSlot => self
                .colors
                .node_slot
                .iter()
                .map(|(k, v)| (k.as_str(), ValueRef::Text(v.as_str())))
                .collect(),
            Category::LitegraphBase => self
                .colors
                .litegraph_base
                .iter()
                .map(|(k, v)| (k.as_str(), v.view()))
                .collect(),
            Category::ComfyBase => self
                .colors
                .comfy_base
                .iter()
                .map(|(k, v)| (k.as_str(), ValueRef::Text(v.as_str())))
                .collect(),
        }
    }

    /// Deep copy that shares no category storage with `self`.
    pub fn detached(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            colors: ColorBundle {
                node_slot: Arc::new(self.colors.node_slot.as_ref().clone()),
                litegraph_base: Arc::new(self.colors.litegraph_base.as_ref().clone()),
                comfy_base: Arc::new(self.colors.comfy_base.as_ref().clone()),
            },
        }
    }

    /// Whether both documents point at the same storage for `category`.
    pub fn shares_category(&self, other: &ThemeDocument, category: Category) -> bool {
        match category {
            Category::NodeSlot => Arc::ptr_eq(&self.colors.node_slot, &other.colors.node_slot),
            Category::LitegraphBase => {
                Arc::ptr_eq(&self.colors.litegraph_base, &other.colors.litegraph_base)
            }
            Category::ComfyBase => Arc::ptr_eq(&self.colors.comfy_base, &other.colors.comfy_base),
        }
    }
}
