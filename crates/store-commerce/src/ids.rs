//! Newtype IDs for type-safe identifiers.
//!
//! Product identifiers are integers handed out by the repository; session
//! identifiers are opaque strings chosen by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product.
///
/// `ProductId::UNASSIGNED` (zero) marks a product the repository has not
/// stored yet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Id of a product that has not been stored yet.
    pub const UNASSIGNED: ProductId = ProductId(0);

    /// Create a new ID from its integer value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Whether the repository has assigned this id.
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A shopper session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_ordering() {
        let mut ids = vec![ProductId::new(3), ProductId::new(1), ProductId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2), ProductId::new(3)]);
    }

    #[test]
    fn test_unassigned_id() {
        assert!(!ProductId::UNASSIGNED.is_assigned());
        assert!(ProductId::new(7).is_assigned());
        assert_eq!(ProductId::default(), ProductId::UNASSIGNED);
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let json = serde_json::to_string(&ProductId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_session_id_from_str() {
        let id: SessionId = "sess-1".into();
        assert_eq!(id.as_str(), "sess-1");
        assert_eq!(format!("{}", id), "sess-1");
    }
}
