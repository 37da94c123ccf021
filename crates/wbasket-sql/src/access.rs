//! Statements over the `WORKBASKET_ACCESS_LIST` table.

use wbasket_types::Permission;

use crate::column::{column_list, AccessColumn, ColumnSet};
use crate::statement::{in_list, placeholder_list, Statement};

const TABLE: &str = AccessColumn::TABLE;

fn select_prefix() -> String {
    format!("SELECT {} FROM {TABLE}", column_list::<AccessColumn>(&[]))
}

/// Binds: `id`.
pub fn select_by_id() -> Statement {
    Statement::new(format!("{} WHERE ID = ?", select_prefix()), 1)
}

/// Binds nothing.
pub fn select_all() -> Statement {
    Statement::new(select_prefix(), 0)
}

/// Binds: `workbasket_id`.
pub fn select_by_container_id() -> Statement {
    Statement::new(format!("{} WHERE WORKBASKET_ID = ?", select_prefix()), 1)
}

/// Entries on one workbasket, held by any of `n` access IDs, that grant
/// `permission`.
///
/// Binds: `workbasket_id`, then each access ID. With `n == 0` the statement
/// matches nothing.
pub fn select_by_container_and_access_ids(n: usize, permission: Permission) -> Statement {
    Statement::new(
        format!(
            "{} WHERE WORKBASKET_ID = ? AND {} AND {} = 1",
            select_prefix(),
            in_list("ACCESS_ID", n),
            AccessColumn::for_permission(permission).name()
        ),
        n + 1,
    )
}

/// Binds: every column in declaration order.
pub fn insert() -> Statement {
    let n = AccessColumn::all().len();
    Statement::new(
        format!(
            "INSERT INTO {TABLE} ({}) VALUES ({})",
            column_list::<AccessColumn>(&[]),
            placeholder_list(n)
        ),
        n,
    )
}

/// Binds: every mutable column in declaration order, then `id`.
pub fn update() -> Statement {
    let assignments: Vec<String> = AccessColumn::all()
        .iter()
        .filter(|c| !AccessColumn::IMMUTABLE.contains(c))
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

/// Binds: `workbasket_id`.
pub fn delete_by_container_id() -> Statement {
    Statement::new(format!("DELETE FROM {TABLE} WHERE WORKBASKET_ID = ?"), 1)
}
