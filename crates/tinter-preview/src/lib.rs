//! Live preview binding for Tinter.
//!
//! A declarative table of clickable preview regions. Each region paints
//! style properties from document fields (forward direction) and targets
//! exactly one field when clicked (reverse direction). Also maps fields to
//! the editor tab that owns them.

pub mod region;
pub mod render;
pub mod routing;
pub mod table;

pub use region::{Paint, RegionSpec, StyleProp};
pub use render::{render, render_with, RenderedRegion, ResolvedStyle};
pub use routing::{row_id, EditorTab};
pub use table::{RegionTable, BUS_SLOT_LIMIT};
