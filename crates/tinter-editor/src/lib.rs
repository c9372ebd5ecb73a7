//! Editor session for Tinter.
//!
//! Owns the current document and its provenance, routes preview clicks to
//! editor rows (tab switch, timed highlight, deferred scroll), and runs AI
//! transforms without ever leaving the document half-replaced.

pub mod error;
pub mod events;
pub mod highlight;
pub mod rows;
pub mod scroll;
pub mod session;

pub use error::EditorError;
pub use events::{EditorEvent, EventBus};
pub use highlight::HighlightState;
pub use rows::{rows_for, EditorRow};
pub use scroll::{NullScrollTarget, ScrollTarget};
pub use session::{EditorSession, SessionConfig, TransformOutcome};

/// Shown when a transform is attempted without an API key.
pub const MISSING_KEY_MESSAGE: &str =
    "Missing API Key. AI features are disabled, but the editor still works.";

/// Shown for every other transform failure.
pub const TRANSFORM_FAILED_MESSAGE: &str = "Failed to generate theme.";
