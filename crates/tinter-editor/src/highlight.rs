//! The highlight state machine.
//!
//! `Idle → Highlighted(key, expires_at, generation)` on select, and back to
//! `Idle` only when the expiry for the *current* generation fires. A newer
//! select bumps the generation, so a stale expiry is a no-op.

use tokio::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    Idle,
    Highlighted {
        key: String,
        expires_at: Instant,
        generation: u64,
    },
}

impl HighlightState {
    pub fn start(key: impl Into<String>, duration: Duration, generation: u64) -> Self {
        HighlightState::Highlighted {
            key: key.into(),
            expires_at: Instant::now() + duration,
            generation,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            HighlightState::Highlighted { key, .. } => Some(key),
            HighlightState::Idle => None,
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            HighlightState::Highlighted { generation, .. } => Some(*generation),
            HighlightState::Idle => None,
        }
    }

    pub fn is_highlighted(&self, key: &str) -> bool {
        self.key() == Some(key)
    }

    /// Clear the highlight if it still belongs to `generation`. Returns
    /// whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation() == Some(generation) {
            *self = HighlightState::Idle;
            true
        } else {
            false
        }
    }
}
