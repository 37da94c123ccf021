//! Row mapping and statement execution for the three tables.
//!
//! Every function takes a borrowed `Connection` (or a transaction derefed
//! to one) and runs a statement from `wbasket-sql`. None of them acquires
//! a connection or opens a transaction; that belongs to the services.

pub(crate) mod access;
pub(crate) mod distribution;
pub(crate) mod workbasket;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

use crate::model::parse_timestamp;

/// Most `?` placeholders SQLite accepts in one statement
/// (`SQLITE_MAX_VARIABLE_NUMBER` of the bundled build). Variable-length
/// lists are split into statements that stay under it.
pub(crate) const MAX_VARIABLES: usize = 32_766;

/// Reads an RFC 3339 text column as a UTC timestamp.
fn timestamp_at(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an optional JSON text column.
fn json_at(row: &Row, idx: usize) -> rusqlite::Result<Option<serde_json::Value>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        serde_json::from_str(&s)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> rusqlite::Result<Vec<T>> {
    let mut items = Vec::new();
    for row in rows {
        items.push(row?);
    }
    Ok(items)
}
