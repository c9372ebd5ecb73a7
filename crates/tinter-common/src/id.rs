use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one outstanding AI transform request.
///
/// The editor keeps the id of the request it is waiting for and drops any
/// result whose id no longer matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight hex digits, enough to tell requests apart in logs.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_is_v4_uuid() {
        let rid = RequestId::new();
        let parsed = uuid::Uuid::parse_str(rid.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn request_ids_differ() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn display_is_short_hex() {
        let rid = RequestId::default();
        let shown = rid.to_string();
        assert_eq!(shown.len(), 8);
        assert!(shown.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(rid.as_str().starts_with(&shown));
    }

    #[test]
    fn request_id_serialization() {
        let rid = RequestId::new();
        let json = serde_json::to_string(&rid).unwrap();
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(rid, back);
    }
}
