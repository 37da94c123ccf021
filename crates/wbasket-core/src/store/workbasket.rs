//! `WORKBASKET` rows.

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use wbasket_sql::{workbasket, WorkbasketColumn};
use wbasket_types::Permission;

use super::{collect_rows, json_at, timestamp_at, MAX_VARIABLES};
use crate::error::ServiceError;
use crate::model::{format_timestamp, Workbasket};

pub(crate) fn find_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<Workbasket>> {
    conn.query_row(workbasket::select_by_id().sql(), [id], map_row)
        .optional()
}

pub(crate) fn find_by_ids(conn: &Connection, ids: &[String]) -> rusqlite::Result<Vec<Workbasket>> {
    let mut found = Vec::new();
    for chunk in ids.chunks(MAX_VARIABLES) {
        let stmt = workbasket::select_by_ids(chunk.len());
        let mut prepared = conn.prepare(stmt.sql())?;
        let rows = prepared.query_map(params_from_iter(chunk.iter()), map_row)?;
        found.extend(collect_rows(rows)?);
    }
    Ok(found)
}

pub(crate) fn find_all(conn: &Connection) -> rusqlite::Result<Vec<Workbasket>> {
    let mut prepared = conn.prepare(workbasket::select_all().sql())?;
    let rows = prepared.query_map([], map_row)?;
    collect_rows(rows)
}

pub(crate) fn find_by_permission(
    conn: &Connection,
    permissions: &[Permission],
    access_id: &str,
) -> rusqlite::Result<Vec<Workbasket>> {
    let stmt = workbasket::select_by_permission(permissions);
    let mut prepared = conn.prepare(stmt.sql())?;
    let rows = prepared.query_map([access_id], map_row)?;
    collect_rows(rows)
}

pub(crate) fn insert(conn: &Connection, wb: &Workbasket) -> Result<(), ServiceError> {
    let values = workbasket::row_columns()
        .into_iter()
        .map(|column| column_value(wb, column))
        .collect::<Result<Vec<_>, _>>()?;
    conn.execute(workbasket::insert().sql(), params_from_iter(values))?;
    Ok(())
}

/// Returns the number of rows changed; zero means the ID is unknown.
pub(crate) fn update(conn: &Connection, wb: &Workbasket) -> Result<usize, ServiceError> {
    let mut values = workbasket::mutable_columns()
        .into_iter()
        .map(|column| column_value(wb, column))
        .collect::<Result<Vec<_>, _>>()?;
    values.push(Value::Text(wb.id.clone()));
    Ok(conn.execute(workbasket::update().sql(), params_from_iter(values))?)
}

pub(crate) fn delete(conn: &Connection, id: &str) -> rusqlite::Result<usize> {
    conn.execute(workbasket::delete().sql(), [id])
}

fn text(value: &Option<String>) -> Value {
    value.clone().map_or(Value::Null, Value::Text)
}

fn column_value(wb: &Workbasket, column: WorkbasketColumn) -> Result<Value, serde_json::Error> {
    let value = match column {
        WorkbasketColumn::Id => Value::Text(wb.id.clone()),
        WorkbasketColumn::Created => wb
            .created
            .as_ref()
            .map_or(Value::Null, |ts| Value::Text(format_timestamp(ts))),
        WorkbasketColumn::Modified => wb
            .modified
            .as_ref()
            .map_or(Value::Null, |ts| Value::Text(format_timestamp(ts))),
        WorkbasketColumn::Name => Value::Text(wb.name.clone()),
        WorkbasketColumn::LongName => text(&wb.long_name),
        WorkbasketColumn::Description => text(&wb.description),
        WorkbasketColumn::Owner => text(&wb.owner),
        WorkbasketColumn::Email => text(&wb.email),
        WorkbasketColumn::Phone => text(&wb.phone),
        WorkbasketColumn::OrgLevel1 => text(&wb.org_level_1),
        WorkbasketColumn::OrgLevel2 => text(&wb.org_level_2),
        WorkbasketColumn::OrgLevel3 => text(&wb.org_level_3),
        WorkbasketColumn::OrgLevel4 => text(&wb.org_level_4),
        WorkbasketColumn::Data => match &wb.data {
            Some(data) => Value::Text(serde_json::to_string(data)?),
            None => Value::Null,
        },
        // Stored in other tables, never part of the row.
        WorkbasketColumn::DistributionTargets | WorkbasketColumn::Permissions => Value::Null,
    };
    Ok(value)
}

/// Columns arrive in `row_columns()` order.
fn map_row(row: &Row) -> rusqlite::Result<Workbasket> {
    Ok(Workbasket {
        id: row.get(0)?,
        created: Some(timestamp_at(row, 1)?),
        modified: Some(timestamp_at(row, 2)?),
        name: row.get(3)?,
        long_name: row.get(4)?,
        description: row.get(5)?,
        owner: row.get(6)?,
        email: row.get(7)?,
        phone: row.get(8)?,
        org_level_1: row.get(9)?,
        org_level_2: row.get(10)?,
        org_level_3: row.get(11)?,
        org_level_4: row.get(12)?,
        data: json_at(row, 13)?,
        distribution_targets: Vec::new(),
    })
}
