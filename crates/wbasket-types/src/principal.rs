//! Caller identity passed explicitly into service operations.

use serde::{Deserialize, Serialize};

/// The authenticated caller of a service operation.
///
/// Resolves to an ordered list of access IDs: the principal's own ID first,
/// followed by the IDs of every group the principal belongs to. Access
/// entries may be granted to any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalContext {
    principal_id: String,
    group_ids: Vec<String>,
}

impl PrincipalContext {
    /// Creates a context for a principal without group memberships.
    pub fn new(principal_id: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            group_ids: Vec::new(),
        }
    }

    /// Adds group memberships, skipping the principal's own ID and repeats.
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for group in groups {
            let group = group.into();
            if group != self.principal_id && !self.group_ids.contains(&group) {
                self.group_ids.push(group);
            }
        }
        self
    }

    /// The caller's own ID.
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }

    /// The caller's group memberships.
    pub fn group_ids(&self) -> &[String] {
        &self.group_ids
    }

    /// All access IDs of the caller. Never empty.
    pub fn access_ids(&self) -> Vec<&str> {
        std::iter::once(self.principal_id.as_str())
            .chain(self.group_ids.iter().map(String::as_str))
            .collect()
    }
}
