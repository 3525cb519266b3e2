//! Identifier newtypes shared across the workspace
//!
//! Wizard rows are correlated with zones through `SignerIndex` before any
//! durable identifier exists. `UserId` and `GroupId` are issued by the
//! platform. Keeping them as separate types stops a row index from being
//! sent where the API expects a user id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Durable user identifier issued by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Signer-group identifier issued by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Position of a signer row (or role placeholder row) in a draft.
///
/// Valid only inside the draft that produced it; never serialized to the
/// API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignerIndex(pub usize);

impl fmt::Display for SignerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_serializes_transparently() {
        let id = UserId::new("usr-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"usr-42\"");
    }

    #[test]
    fn test_signer_index_is_not_a_user_id() {
        // A compile-time guarantee, but keep the display contract pinned
        assert_eq!(SignerIndex(3).to_string(), "3");
        assert_eq!(UserId::new("3").to_string(), "3");
    }

    #[test]
    fn test_signer_index_orders_by_position() {
        let mut rows = vec![SignerIndex(2), SignerIndex(0), SignerIndex(1)];
        rows.sort();
        assert_eq!(rows, vec![SignerIndex(0), SignerIndex(1), SignerIndex(2)]);
    }
}
