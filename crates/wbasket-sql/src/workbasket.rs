//! Statements over the `WORKBASKET` table.
//!
//! Row-returning statements select [`row_columns`] in declaration order, so
//! a mapper can read the columns by index.

use std::collections::BTreeSet;

use wbasket_types::Permission;

use crate::column::{
    column_list, qualified_column_list, AccessColumn, ColumnSet, WorkbasketColumn,
};
use crate::statement::{in_list, placeholder_list, Statement};

const TABLE: &str = WorkbasketColumn::TABLE;

/// The columns stored in a workbasket row, in declaration order.
pub fn row_columns() -> Vec<WorkbasketColumn> {
    WorkbasketColumn::all()
        .iter()
        .copied()
        .filter(|c| !WorkbasketColumn::NOT_IN_ROW.contains(c))
        .collect()
}

/// The columns an update writes, in declaration order.
pub fn mutable_columns() -> Vec<WorkbasketColumn> {
    row_columns()
        .into_iter()
        .filter(|c| !WorkbasketColumn::IMMUTABLE.contains(c))
        .collect()
}

fn select_prefix() -> String {
    format!(
        "SELECT {} FROM {TABLE}",
        column_list(&WorkbasketColumn::NOT_IN_ROW)
    )
}

/// Binds: `id`.
pub fn select_by_id() -> Statement {
    Statement::new(format!("{} WHERE ID = ?", select_prefix()), 1)
}

/// Binds: one value per ID. With `n == 0` the statement matches nothing.
pub fn select_by_ids(n: usize) -> Statement {
    Statement::new(format!("{} WHERE {}", select_prefix(), in_list("ID", n)), n)
}

/// Binds nothing.
pub fn select_all() -> Statement {
    Statement::new(select_prefix(), 0)
}

/// Workbaskets on which one access ID holds any of `permissions`.
///
/// Binds: `access_id`. The permission flags are columns, not values; the
/// text is the same for any ordering or repetition of `permissions`. An
/// empty permission set matches nothing.
pub fn select_by_permission(permissions: &[Permission]) -> Statement {
    let flags: BTreeSet<Permission> = permissions.iter().copied().collect();
    let predicate = if flags.is_empty() {
        "1 = 0".to_string()
    } else {
        flags
            .into_iter()
            .map(|p| format!("A.{} = 1", AccessColumn::for_permission(p).name()))
            .collect::<Vec<_>>()
            .join(" OR ")
    };

    Statement::new(
        format!(
            "SELECT DISTINCT {} FROM {TABLE} AS W \
             INNER JOIN {} AS A ON W.ID = A.WORKBASKET_ID \
             WHERE A.ACCESS_ID = ? AND ({predicate})",
            qualified_column_list("W", &WorkbasketColumn::NOT_IN_ROW),
            AccessColumn::TABLE,
        ),
        1,
    )
}

/// Binds: every row column in declaration order.
pub fn insert() -> Statement {
    let n = row_columns().len();
    Statement::new(
        format!(
            "INSERT INTO {TABLE} ({}) VALUES ({})",
            column_list(&WorkbasketColumn::NOT_IN_ROW),
            placeholder_list(n)
        ),
        n,
    )
}

/// Binds: every mutable column in declaration order, then `id`.
pub fn update() -> Statement {
    let assignments: Vec<String> = mutable_columns()
        .into_iter()
        .map(|c| format!("{} = ?", c.name()))
        .collect();
    let n = assignments.len() + 1;
    Statement::new(
        format!("UPDATE {TABLE} SET {} WHERE ID = ?", assignments.join(", ")),
        n,
    )
}

/// Binds: `id`.
pub fn delete() -> Statement {
    Statement::new(format!("DELETE FROM {TABLE} WHERE ID = ?"), 1)
}
