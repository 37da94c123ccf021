//! Database layer for the workbasket routing core.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! embedded SQL migrations, and the [`ConnectionScope`] every service
//! operation runs inside.
//!
//! # Design decisions
//!
//! - **SQLite with WAL mode**: concurrent readers with a single writer, no
//!   external database process.
//! - **`r2d2` connection pool**: bounded connection reuse. A scope holds one
//!   pooled connection and hands it back when dropped.
//! - **Embedded migrations**: SQL files are compiled into the binary via
//!   `include_str!`, so the schema cannot drift from the statements built
//!   against it.

mod migrations;
mod pool;
mod scope;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
pub use scope::ConnectionScope;
