//! The statement value returned by every builder.

use std::fmt;

/// SQL text together with the number of values it expects to be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    placeholders: usize,
}

impl Statement {
    pub(crate) fn new(sql: String, placeholders: usize) -> Self {
        debug_assert_eq!(sql.matches('?').count(), placeholders);
        Self { sql, placeholders }
    }

    /// The SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Number of `?` placeholders in [`Statement::sql`].
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// `?, ?, ?` for `n` values.
pub(crate) fn placeholder_list(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// `(?, ?), (?, ?)` for `rows` tuples of `arity` values each.
pub(crate) fn tuple_list(rows: usize, arity: usize) -> String {
    let tuple = format!("({})", placeholder_list(arity));
    vec![tuple.as_str(); rows].join(", ")
}

/// `COL IN (?, ?)`, or a predicate that is never true when `n` is zero.
pub(crate) fn in_list(column: &str, n: usize) -> String {
    if n == 0 {
        "1 = 0".to_string()
    } else {
        format!("{column} IN ({})", placeholder_list(n))
    }
}
