//! The theme document: `{ id, name, colors }`.
//!
//! Categories are held behind `Arc` so that an edit can hand back a new
//! document sharing the untouched categories with its predecessor. Key
//! order within a category is insertion order and is preserved through
//! serialization, which makes an untouched document re-serialize
//! byte-for-byte.

mod shape;
mod types;


pub use shape::ShapeMismatch;
pub use types::{ChromeColors, ColorBundle, GraphStyle, SlotColors, ThemeDocument, ThemeValue, ValueRef};
