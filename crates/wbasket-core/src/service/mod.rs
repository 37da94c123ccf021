//! Use-case services over the workbasket tables.
//!
//! Each public operation acquires one [`ConnectionScope`](wbasket_db::ConnectionScope)
//! for its whole duration. Operations that write more than one statement
//! run them in a single transaction on that connection.

pub(crate) mod access;
pub(crate) mod reconcile;
pub(crate) mod workbasket;
