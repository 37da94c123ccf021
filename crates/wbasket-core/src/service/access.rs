//! CRUD over access items.

use std::sync::Arc;

use wbasket_db::{ConnectionScope, DbPool};
use wbasket_types::{Permission, ID_PREFIX_ACCESS_ITEM};

use crate::error::ServiceError;
use crate::ids::IdGenerator;
use crate::model::AccessItem;
use crate::store;

/// Create, read, update and delete access items.
///
/// Uniqueness of `(workbasket_id, access_id)` is not enforced; two items
/// for the same pair simply both apply.
#[derive(Clone)]
pub struct AccessControlService {
    pool: DbPool,
    ids: Arc<dyn IdGenerator>,
}

impl AccessControlService {
    pub fn new(pool: DbPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }

    /// Stores `item` under a freshly generated ID. Any ID on `item` is
    /// replaced.
    ///
    /// # Errors
    ///
    /// `WorkbasketNotFound` when `item.workbasket_id` does not exist.
    pub fn create(&self, mut item: AccessItem) -> Result<AccessItem, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "create_access_item")?;
        if store::workbasket::find_by_id(&scope, &item.workbasket_id)?.is_none() {
            return Err(ServiceError::WorkbasketNotFound(item.workbasket_id));
        }
        item.id = self.ids.generate(ID_PREFIX_ACCESS_ITEM);
        store::access::insert(&scope, &item)?;
        tracing::debug!(
            access_item_id = %item.id,
            workbasket_id = %item.workbasket_id,
            access_id = %item.access_id,
            "access item created"
        );
        Ok(item)
    }

    pub fn get(&self, id: &str) -> Result<AccessItem, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "get_access_item")?;
        store::access::find_by_id(&scope, id)?
            .ok_or_else(|| ServiceError::AccessItemNotFound(id.to_string()))
    }

    pub fn list_all(&self) -> Result<Vec<AccessItem>, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "list_access_items")?;
        Ok(store::access::find_all(&scope)?)
    }

    /// All items granted on one workbasket.
    pub fn list_by_workbasket(&self, workbasket_id: &str) -> Result<Vec<AccessItem>, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "list_access_items_by_workbasket")?;
        Ok(store::access::find_by_container_id(&scope, workbasket_id)?)
    }

    /// Rewrites the access ID and permissions of an existing item.
    ///
    /// The item's ID and workbasket binding are never changed; a different
    /// `workbasket_id` on `item` is ignored. Returns the stored item.
    pub fn update(&self, item: AccessItem) -> Result<AccessItem, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "update_access_item")?;
        if store::access::update(&scope, &item)? == 0 {
            return Err(ServiceError::AccessItemNotFound(item.id));
        }
        tracing::debug!(access_item_id = %item.id, "access item updated");
        store::access::find_by_id(&scope, &item.id)?
            .ok_or(ServiceError::AccessItemNotFound(item.id))
    }

    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "delete_access_item")?;
        if store::access::delete(&scope, id)? == 0 {
            return Err(ServiceError::AccessItemNotFound(id.to_string()));
        }
        tracing::debug!(access_item_id = id, "access item deleted");
        Ok(())
    }

    /// Items on `workbasket_id` held by any of `access_ids` that grant
    /// `permission`.
    pub fn find_granting(
        &self,
        workbasket_id: &str,
        access_ids: &[&str],
        permission: Permission,
    ) -> Result<Vec<AccessItem>, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "find_granting_access_items")?;
        Ok(store::access::find_granting(
            &scope,
            workbasket_id,
            access_ids,
            permission,
        )?)
    }
}
