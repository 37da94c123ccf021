//! `DISTRIBUTION_TARGETS` links.

use rusqlite::{params_from_iter, Connection};
use wbasket_sql::distribution;

use super::{collect_rows, MAX_VARIABLES};

pub(crate) fn find_targets_by_source(
    conn: &Connection,
    source_id: &str,
) -> rusqlite::Result<Vec<String>> {
    let mut prepared = conn.prepare(distribution::select_targets_by_source().sql())?;
    let rows = prepared.query_map([source_id], |row| row.get(0))?;
    collect_rows(rows)
}

/// Inserts one link per target, as few statements as the variable limit
/// allows.
pub(crate) fn insert_links(
    conn: &Connection,
    source_id: &str,
    targets: &[String],
) -> rusqlite::Result<usize> {
    let mut inserted = 0;
    for chunk in targets.chunks(MAX_VARIABLES / 2) {
        let Some(stmt) = distribution::insert_batch_pairs(chunk.len()) else {
            continue;
        };
        let values = chunk
            .iter()
            .flat_map(|target| [source_id, target.as_str()]);
        inserted += conn.execute(stmt.sql(), params_from_iter(values))?;
    }
    Ok(inserted)
}

/// Removes the links from `source_id` to each of `targets`.
pub(crate) fn delete_links(
    conn: &Connection,
    source_id: &str,
    targets: &[String],
) -> rusqlite::Result<usize> {
    let mut deleted = 0;
    for chunk in targets.chunks(MAX_VARIABLES - 1) {
        let Some(stmt) = distribution::delete_targets(chunk.len()) else {
            continue;
        };
        let values = std::iter::once(source_id).chain(chunk.iter().map(String::as_str));
        deleted += conn.execute(stmt.sql(), params_from_iter(values))?;
    }
    Ok(deleted)
}

/// Removes every link the workbasket takes part in, as source or target.
pub(crate) fn delete_by_container_id(conn: &Connection, id: &str) -> rusqlite::Result<usize> {
    conn.execute(distribution::delete_by_container_id().sql(), [id, id])
}
