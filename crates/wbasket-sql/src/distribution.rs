//! Statements over the `DISTRIBUTION_TARGETS` link table.

use crate::column::{column_list, ColumnSet, DistributionColumn};
use crate::statement::{placeholder_list, tuple_list, Statement};

const TABLE: &str = DistributionColumn::TABLE;

/// Binds: `source_id`. Returns one `TARGET_ID` column.
pub fn select_targets_by_source() -> Statement {
    Statement::new(
        format!("SELECT TARGET_ID FROM {TABLE} WHERE SOURCE_ID = ?"),
        1,
    )
}

/// Inserts `n` links in one statement.
///
/// Binds: `source_id, target_id` for each pair, in order. Returns `None`
/// when `n == 0`.
pub fn insert_batch_pairs(n: usize) -> Option<Statement> {
    if n == 0 {
        return None;
    }
    Some(Statement::new(
        format!(
            "INSERT INTO {TABLE} ({}) VALUES {}",
            column_list::<DistributionColumn>(&[]),
            tuple_list(n, 2)
        ),
        n * 2,
    ))
}

/// Deletes the links from one source to `n` targets.
///
/// Binds: `source_id`, then each target ID. Returns `None` when `n == 0`.
pub fn delete_targets(n: usize) -> Option<Statement> {
    if n == 0 {
        return None;
    }
    Some(Statement::new(
        format!(
            "DELETE FROM {TABLE} WHERE SOURCE_ID = ? AND TARGET_ID IN ({})",
            placeholder_list(n)
        ),
        n + 1,
    ))
}

/// Deletes every link in which a workbasket takes part, on either side.
///
/// Binds: `id`, `id`.
pub fn delete_by_container_id() -> Statement {
    Statement::new(
        format!("DELETE FROM {TABLE} WHERE SOURCE_ID = ? OR TARGET_ID = ?"),
        2,
    )
}
