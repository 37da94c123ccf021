//! Shared types and constants for the workbasket routing core.
//!
//! This crate provides the vocabulary used across all `wbasket-*` crates:
//! the permission flags carried by access-control entries, the fixed ID
//! prefixes for generated identifiers, and the explicit principal context
//! handed to every operation that needs to know who is calling.
//!
//! It has no storage or SQL knowledge, which keeps the dependency graph
//! flat: `wbasket-sql`, `wbasket-db` and `wbasket-core` all depend on it,
//! never the other way around.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod principal;
pub use principal::PrincipalContext;

/// Prefix for generated workbasket IDs.
pub const ID_PREFIX_WORKBASKET: &str = "WBI";

/// Prefix for generated access-control entry IDs.
pub const ID_PREFIX_ACCESS_ITEM: &str = "WAI";

/// A named permission that an access-control entry can grant on a workbasket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// View the workbasket and its contents.
    Read,
    /// Open items held in the workbasket.
    Open,
    /// Add items to the workbasket.
    Append,
    /// Move items out of the workbasket into another one.
    Transfer,
    /// Route items to the workbasket's distribution targets.
    Distribute,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 5] = [
        Self::Read,
        Self::Open,
        Self::Append,
        Self::Transfer,
        Self::Distribute,
    ];

    /// Returns the canonical label for this permission.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Open => "OPEN",
            Self::Append => "APPEND",
            Self::Transfer => "TRANSFER",
            Self::Distribute => "DISTRIBUTE",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Read),
            "OPEN" => Ok(Self::Open),
            "APPEND" => Ok(Self::Append),
            "TRANSFER" => Ok(Self::Transfer),
            "DISTRIBUTE" => Ok(Self::Distribute),
            _ => Err(ParsePermissionError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown permission label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission: {0}")]
pub struct ParsePermissionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_labels_round_trip() {
        for permission in Permission::ALL {
            let parsed: Permission = permission.as_str().parse().expect("label should parse");
            assert_eq!(parsed, permission);
        }
    }

    #[test]
    fn permission_unknown_label() {
        let err = "DELETE".parse::<Permission>().unwrap_err();
        assert_eq!(err, ParsePermissionError("DELETE".to_string()));
        assert_eq!(err.to_string(), "unknown permission: DELETE");
    }

    #[test]
    fn permission_serializes_as_label() {
        let json = serde_json::to_string(&Permission::Distribute).expect("should serialize");
        assert_eq!(json, "\"DISTRIBUTE\"");
    }

    #[test]
    fn id_prefixes_are_distinct() {
        assert_eq!(ID_PREFIX_WORKBASKET.len(), 3);
        assert_eq!(ID_PREFIX_ACCESS_ITEM.len(), 3);
        assert_ne!(ID_PREFIX_WORKBASKET, ID_PREFIX_ACCESS_ITEM);
    }
}
