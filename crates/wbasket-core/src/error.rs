//! Error types for the service layer.

use wbasket_types::Permission;

/// Errors surfaced by [`WorkbasketService`](crate::WorkbasketService) and
/// [`AccessControlService`](crate::AccessControlService).
///
/// Storage failures are wrapped without interpretation; nothing here is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No workbasket with this ID exists.
    #[error("workbasket not found: {0}")]
    WorkbasketNotFound(String),

    /// No access item with this ID exists.
    #[error("access item not found: {0}")]
    AccessItemNotFound(String),

    /// None of the caller's access IDs holds the required permission.
    #[error(
        "not authorized: permission '{permission}' on workbasket '{workbasket_id}' is needed by '{principal}'"
    )]
    NotAuthorized {
        /// The caller's principal ID.
        principal: String,
        /// The permission that was required.
        permission: Permission,
        /// The workbasket the permission was required on.
        workbasket_id: String,
    },

    /// A database operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No pooled connection could be acquired.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Extension data could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WorkbasketNotFound(_) | Self::AccessItemNotFound(_)
        )
    }
}
