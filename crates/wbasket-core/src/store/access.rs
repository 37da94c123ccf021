//! `WORKBASKET_ACCESS_LIST` rows.

use std::collections::BTreeSet;

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use wbasket_sql::{access, AccessColumn, ColumnSet};
use wbasket_types::Permission;

use super::{collect_rows, MAX_VARIABLES};
use crate::model::AccessItem;

pub(crate) fn find_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<AccessItem>> {
    conn.query_row(access::select_by_id().sql(), [id], map_row)
        .optional()
}

pub(crate) fn find_all(conn: &Connection) -> rusqlite::Result<Vec<AccessItem>> {
    let mut prepared = conn.prepare(access::select_all().sql())?;
    let rows = prepared.query_map([], map_row)?;
    collect_rows(rows)
}

pub(crate) fn find_by_container_id(
    conn: &Connection,
    workbasket_id: &str,
) -> rusqlite::Result<Vec<AccessItem>> {
    let mut prepared = conn.prepare(access::select_by_container_id().sql())?;
    let rows = prepared.query_map([workbasket_id], map_row)?;
    collect_rows(rows)
}

/// Items on `workbasket_id`, held by any of `access_ids`, that grant `permission`.
pub(crate) fn find_granting(
    conn: &Connection,
    workbasket_id: &str,
    access_ids: &[&str],
    permission: Permission,
) -> rusqlite::Result<Vec<AccessItem>> {
    let mut granting = Vec::new();
    for chunk in access_ids.chunks(MAX_VARIABLES - 1) {
        let stmt = access::select_by_container_and_access_ids(chunk.len(), permission);
        let values = std::iter::once(workbasket_id).chain(chunk.iter().copied());
        let mut prepared = conn.prepare(stmt.sql())?;
        let rows = prepared.query_map(params_from_iter(values), map_row)?;
        granting.extend(collect_rows(rows)?);
    }
    Ok(granting)
}

pub(crate) fn insert(conn: &Connection, item: &AccessItem) -> rusqlite::Result<()> {
    let values = AccessColumn::all()
        .iter()
        .map(|column| column_value(item, *column));
    conn.execute(access::insert().sql(), params_from_iter(values))?;
    Ok(())
}

/// Returns the number of rows changed; zero means the ID is unknown.
pub(crate) fn update(conn: &Connection, item: &AccessItem) -> rusqlite::Result<usize> {
    let values = AccessColumn::all()
        .iter()
        .filter(|column| !AccessColumn::IMMUTABLE.contains(column))
        .map(|column| column_value(item, *column))
        .chain(std::iter::once(Value::Text(item.id.clone())));
    conn.execute(access::update().sql(), params_from_iter(values))
}

pub(crate) fn delete(conn: &Connection, id: &str) -> rusqlite::Result<usize> {
    conn.execute(access::delete().sql(), [id])
}

pub(crate) fn delete_by_container_id(
    conn: &Connection,
    workbasket_id: &str,
) -> rusqlite::Result<usize> {
    conn.execute(access::delete_by_container_id().sql(), [workbasket_id])
}

fn flag(item: &AccessItem, permission: Permission) -> Value {
    Value::Integer(i64::from(item.grants(permission)))
}

fn column_value(item: &AccessItem, column: AccessColumn) -> Value {
    match column {
        AccessColumn::Id => Value::Text(item.id.clone()),
        AccessColumn::WorkbasketId => Value::Text(item.workbasket_id.clone()),
        AccessColumn::AccessId => Value::Text(item.access_id.clone()),
        AccessColumn::PermRead => flag(item, Permission::Read),
        AccessColumn::PermOpen => flag(item, Permission::Open),
        AccessColumn::PermAppend => flag(item, Permission::Append),
        AccessColumn::PermTransfer => flag(item, Permission::Transfer),
        AccessColumn::PermDistribute => flag(item, Permission::Distribute),
    }
}

/// Columns arrive in `AccessColumn` declaration order; the flag columns
/// follow `Permission::ALL`.
fn map_row(row: &Row) -> rusqlite::Result<AccessItem> {
    let mut permissions = BTreeSet::new();
    for (offset, permission) in Permission::ALL.into_iter().enumerate() {
        if row.get::<_, bool>(3 + offset)? {
            permissions.insert(permission);
        }
    }
    Ok(AccessItem {
        id: row.get(0)?,
        workbasket_id: row.get(1)?,
        access_id: row.get(2)?,
        permissions,
    })
}
