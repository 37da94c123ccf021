//! Minimal insert/delete plan for a workbasket's distribution targets.

use std::collections::HashSet;

/// Links to add and links to drop so that the persisted targets of a
/// workbasket equal a newly declared list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationPlan {
    /// Declared targets with no persisted link, in declaration order.
    pub to_insert: Vec<String>,
    /// Persisted targets that are no longer declared, in persisted order.
    pub to_delete: Vec<String>,
}

impl ReconciliationPlan {
    /// Whether applying the plan touches nothing.
    pub fn is_empty(&self) -> bool {
        self.to_insert.is_empty() && self.to_delete.is_empty()
    }
}

/// Plans the reconciliation of `persisted` against `declared`.
///
/// Starts from a working copy of the persisted targets. Each declared
/// target that is already persisted is struck from the working copy; every
/// other declared target is scheduled for insertion. What is left in the
/// working copy is stale. Links that are still wanted appear in neither
/// list, and repeats in `declared` count once.
pub fn plan_reconciliation(persisted: &[String], declared: &[String]) -> ReconciliationPlan {
    let existing: HashSet<&str> = persisted.iter().map(String::as_str).collect();
    let mut stale: Vec<String> = persisted.to_vec();
    let mut to_insert: Vec<String> = Vec::new();

    for target in declared {
        if !existing.contains(target.as_str()) {
            if !to_insert.contains(target) {
                to_insert.push(target.clone());
            }
        } else {
            stale.retain(|old| old != target);
        }
    }

    ReconciliationPlan {
        to_insert,
        to_delete: stale,
    }
}
