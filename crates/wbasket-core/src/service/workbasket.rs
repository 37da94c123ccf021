//! Workbasket lifecycle and distribution-target reconciliation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use wbasket_db::{ConnectionScope, DbPool};
use wbasket_types::{Permission, PrincipalContext, ID_PREFIX_WORKBASKET};

use super::reconcile::plan_reconciliation;
use crate::auth::AuthorizationGuard;
use crate::error::ServiceError;
use crate::ids::IdGenerator;
use crate::model::{now, Workbasket};
use crate::store;

/// Creates, reads, updates and deletes workbaskets.
///
/// Distribution targets are loaded only by single-workbasket reads
/// ([`get`](Self::get) and the values returned by create/update); list
/// operations return the rows alone.
#[derive(Clone)]
pub struct WorkbasketService {
    pool: DbPool,
    ids: Arc<dyn IdGenerator>,
    guard: AuthorizationGuard,
}

impl WorkbasketService {
    pub fn new(pool: DbPool, ids: Arc<dyn IdGenerator>, guard: AuthorizationGuard) -> Self {
        Self { pool, ids, guard }
    }

    /// Returns the workbasket with its distribution targets.
    ///
    /// # Errors
    ///
    /// `WorkbasketNotFound` when no row has this ID.
    pub fn get(&self, id: &str) -> Result<Workbasket, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "get_workbasket")?;
        load(&scope, id)
    }

    /// Returns every workbasket whose ID is in `ids`; unknown IDs are skipped.
    pub fn get_many(&self, ids: &[String]) -> Result<Vec<Workbasket>, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "get_workbaskets")?;
        Ok(store::workbasket::find_by_ids(&scope, ids)?)
    }

    /// Every workbasket, in no particular order.
    pub fn list_all(&self) -> Result<Vec<Workbasket>, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "list_workbaskets")?;
        Ok(store::workbasket::find_all(&scope)?)
    }

    /// Workbaskets on which any of the caller's access IDs holds any of
    /// `permissions`.
    ///
    /// Each access ID is queried separately and the results are merged; a
    /// workbasket reachable through several access IDs appears once.
    pub fn list_by_permission(
        &self,
        permissions: &[Permission],
        ctx: &PrincipalContext,
    ) -> Result<Vec<Workbasket>, ServiceError> {
        let scope = ConnectionScope::acquire(&self.pool, "list_workbaskets_by_permission")?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut workbaskets = Vec::new();
        for access_id in ctx.access_ids() {
            for wb in store::workbasket::find_by_permission(&scope, permissions, access_id)? {
                if seen.insert(wb.id.clone()) {
                    workbaskets.push(wb);
                }
            }
        }
        Ok(workbaskets)
    }

    /// Persists a new workbasket and links it to its distribution targets.
    ///
    /// Sets `created` and `modified` to now and generates an ID when none
    /// is given. Targets that do not exist yet are created as stubs first.
    /// Returns the workbasket as stored.
    pub fn create(&self, mut wb: Workbasket) -> Result<Workbasket, ServiceError> {
        let mut scope = ConnectionScope::acquire(&self.pool, "create_workbasket")?;
        let tx = scope.transaction()?;

        let now = now();
        wb.created = Some(now);
        wb.modified = Some(now);
        if wb.id.is_empty() {
            wb.id = self.ids.generate(ID_PREFIX_WORKBASKET);
        }

        store::workbasket::insert(&tx, &wb)?;
        tracing::debug!(workbasket_id = %wb.id, "workbasket created");

        let targets = distinct(&wb.distribution_targets);
        ensure_exist(&tx, &targets, now)?;
        store::distribution::insert_links(&tx, &wb.id, &targets)?;

        let created = load(&tx, &wb.id)?;
        tx.commit()?;
        Ok(created)
    }

    /// Rewrites the mutable columns of a workbasket and reconciles its
    /// distribution targets with `wb.distribution_targets`.
    ///
    /// `id` and `created` are never changed. Only links that differ between
    /// the stored and the declared targets are inserted or deleted; an
    /// empty list removes every link. Permissions are not checked here; call
    /// [`check_authorization`](Self::check_authorization) first.
    ///
    /// # Errors
    ///
    /// `WorkbasketNotFound` when no row has `wb.id`.
    pub fn update(&self, mut wb: Workbasket) -> Result<Workbasket, ServiceError> {
        let mut scope = ConnectionScope::acquire(&self.pool, "update_workbasket")?;
        let tx = scope.transaction()?;

        let now = now();
        wb.modified = Some(now);
        if store::workbasket::update(&tx, &wb)? == 0 {
            return Err(ServiceError::WorkbasketNotFound(wb.id));
        }

        let persisted = store::distribution::find_targets_by_source(&tx, &wb.id)?;
        let plan = plan_reconciliation(&persisted, &wb.distribution_targets);

        ensure_exist(&tx, &plan.to_insert, now)?;
        store::distribution::insert_links(&tx, &wb.id, &plan.to_insert)?;
        store::distribution::delete_links(&tx, &wb.id, &plan.to_delete)?;

        tracing::debug!(
            workbasket_id = %wb.id,
            added = plan.to_insert.len(),
            removed = plan.to_delete.len(),
            "workbasket updated"
        );

        let updated = load(&tx, &wb.id)?;
        tx.commit()?;
        Ok(updated)
    }

    /// Deletes a workbasket together with its access items and every
    /// distribution link it takes part in, as source or as target.
    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut scope = ConnectionScope::acquire(&self.pool, "delete_workbasket")?;
        let tx = scope.transaction()?;

        let links = store::distribution::delete_by_container_id(&tx, id)?;
        let items = store::access::delete_by_container_id(&tx, id)?;
        if store::workbasket::delete(&tx, id)? == 0 {
            return Err(ServiceError::WorkbasketNotFound(id.to_string()));
        }
        tx.commit()?;

        tracing::debug!(
            workbasket_id = id,
            links,
            access_items = items,
            "workbasket deleted"
        );
        Ok(())
    }

    /// Fails with `NotAuthorized` unless the caller holds `permission` on
    /// `workbasket_id`. Always succeeds when security is disabled.
    pub fn check_authorization(
        &self,
        workbasket_id: &str,
        permission: Permission,
        ctx: &PrincipalContext,
    ) -> Result<(), ServiceError> {
        self.guard.check(workbasket_id, permission, ctx)
    }
}

fn load(conn: &Connection, id: &str) -> Result<Workbasket, ServiceError> {
    let mut wb = store::workbasket::find_by_id(conn, id)?
        .ok_or_else(|| ServiceError::WorkbasketNotFound(id.to_string()))?;
    wb.distribution_targets = store::distribution::find_targets_by_source(conn, id)?;
    Ok(wb)
}

/// Creates a stub for every ID in `ids` that has no row yet.
fn ensure_exist(conn: &Connection, ids: &[String], now: DateTime<Utc>) -> Result<(), ServiceError> {
    if ids.is_empty() {
        return Ok(());
    }
    let existing: HashSet<String> = store::workbasket::find_by_ids(conn, ids)?
        .into_iter()
        .map(|wb| wb.id)
        .collect();

    for id in ids.iter().filter(|id| !existing.contains(*id)) {
        store::workbasket::insert(conn, &Workbasket::stub(id, now))?;
        tracing::debug!(workbasket_id = %id, "distribution target created");
    }
    Ok(())
}

/// `ids` without repeats, first occurrence kept.
fn distinct(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
