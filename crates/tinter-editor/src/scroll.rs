/// Whatever front end can bring an editor row into view.
pub trait ScrollTarget: Send + Sync {
    /// Scroll the row with DOM-style id `row_id` into view. Returns `false`
    /// when no such row is currently rendered.
    fn scroll_into_view(&self, row_id: &str) -> bool;
}

/// For headless sessions: there is never anything to scroll.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScrollTarget;

impl ScrollTarget for NullScrollTarget {
    fn scroll_into_view(&self, _row_id: &str) -> bool {
        false
    }
}
