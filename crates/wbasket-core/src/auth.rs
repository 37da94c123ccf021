//! Permission checks on workbaskets.
//!
//! Policy:
//!
//! 1. With security disabled every check passes and storage is not touched.
//! 2. Otherwise the caller's access IDs (own ID plus groups) are looked up
//!    against the workbasket's access items for the required permission.
//! 3. A single matching item is enough. No match is `NotAuthorized`.

use wbasket_types::{Permission, PrincipalContext};

use crate::error::ServiceError;
use crate::service::access::AccessControlService;

/// Presence check of a permission for a principal on a workbasket.
#[derive(Clone)]
pub struct AuthorizationGuard {
    security_enabled: bool,
    access: AccessControlService,
}

impl AuthorizationGuard {
    pub fn new(security_enabled: bool, access: AccessControlService) -> Self {
        Self {
            security_enabled,
            access,
        }
    }

    pub fn security_enabled(&self) -> bool {
        self.security_enabled
    }

    /// Succeeds when `ctx` holds `permission` on `workbasket_id` through any
    /// of its access IDs, or when security is disabled.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` when no access item matches; storage errors unchanged.
    pub fn check(
        &self,
        workbasket_id: &str,
        permission: Permission,
        ctx: &PrincipalContext,
    ) -> Result<(), ServiceError> {
        if !self.security_enabled {
            tracing::debug!("skipping permission check since security is disabled");
            return Ok(());
        }

        tracing::debug!(
            principal = ctx.principal_id(),
            %permission,
            workbasket_id,
            "verifying permission"
        );

        let granting = self
            .access
            .find_granting(workbasket_id, &ctx.access_ids(), permission)?;

        if granting.is_empty() {
            return Err(ServiceError::NotAuthorized {
                principal: ctx.principal_id().to_string(),
                permission,
                workbasket_id: workbasket_id.to_string(),
            });
        }
        Ok(())
    }
}
