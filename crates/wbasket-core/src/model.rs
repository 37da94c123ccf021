//! Workbasket and access item records.

use std::collections::BTreeSet;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use wbasket_types::Permission;

/// A named bucket that items are routed through.
///
/// `created` and `modified` are assigned by the service; values supplied by
/// the caller are ignored. `distribution_targets` lists the IDs of the
/// workbaskets this one routes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbasket {
    /// Unique ID. Left empty, one is generated on create.
    pub id: String,
    /// Display name.
    pub name: String,
    pub long_name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub org_level_1: Option<String>,
    pub org_level_2: Option<String>,
    pub org_level_3: Option<String>,
    pub org_level_4: Option<String>,
    /// Opaque extension data.
    pub data: Option<serde_json::Value>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// IDs of the workbaskets this one distributes to.
    #[serde(default)]
    pub distribution_targets: Vec<String>,
}

impl Workbasket {
    /// A workbasket with the given ID and name and nothing else set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replaces the distribution targets.
    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.distribution_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Placeholder created when a distribution target does not exist yet.
    /// Named after its ID, timestamped `now`, with no targets of its own.
    pub(crate) fn stub(id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            created: Some(now),
            modified: Some(now),
            ..Self::default()
        }
    }
}

/// A grant of permissions on one workbasket to one access ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessItem {
    /// Unique ID, always generated on create.
    pub id: String,
    /// The workbasket the grant applies to. Fixed after create.
    pub workbasket_id: String,
    /// The user or group ID that holds the grant.
    pub access_id: String,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: BTreeSet<Permission>,
}

impl AccessItem {
    pub fn new(workbasket_id: impl Into<String>, access_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            workbasket_id: workbasket_id.into(),
            access_id: access_id.into(),
            permissions: BTreeSet::new(),
        }
    }

    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions.extend(permissions);
        self
    }

    /// Whether this item grants `permission`.
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Current time at the precision timestamps are stored with.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
}
