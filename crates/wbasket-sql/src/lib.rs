//! SQL statement text for workbasket storage.
//!
//! Every function in this crate is pure: it assembles SQL text from a fixed,
//! ordered column enumeration and reports how many values the caller has to
//! bind. Values never appear in the text. Each element of a variable-length
//! list gets its own anonymous `?` placeholder, so list sizes from zero
//! upward are safe to execute without any escaping.
//!
//! # Layout
//!
//! | Module | Table |
//! |--------|-------|
//! | [`workbasket`] | `WORKBASKET` |
//! | [`distribution`] | `DISTRIBUTION_TARGETS` |
//! | [`access`] | `WORKBASKET_ACCESS_LIST` |
//!
//! # Degenerate list sizes
//!
//! Selects over an empty IN-list produce a valid statement that matches no
//! rows. Batch writes over an empty list return `None`; there is nothing to
//! execute and the caller skips the round trip.

mod column;
mod statement;

pub mod access;
pub mod distribution;
pub mod workbasket;

pub use column::{
    column_list, qualified_column_list, AccessColumn, ColumnSet, DistributionColumn,
    WorkbasketColumn,
};
pub use statement::Statement;
