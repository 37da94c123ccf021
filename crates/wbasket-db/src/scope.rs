//! Connection scope held for the duration of one service operation.

use std::ops::{Deref, DerefMut};

use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::pool::DbPool;

/// One pooled connection, owned by one operation.
///
/// The connection goes back to the pool when the scope is dropped, which
/// happens on every exit path of the owning operation: normal return, early
/// return through `?`, and unwinding.
pub struct ConnectionScope {
    conn: PooledConnection<SqliteConnectionManager>,
    operation: &'static str,
}

impl ConnectionScope {
    /// Acquires a connection for `operation`, blocking up to the pool's
    /// connection timeout.
    ///
    /// # Errors
    ///
    /// Returns the pool error when no connection becomes available in time.
    pub fn acquire(pool: &DbPool, operation: &'static str) -> Result<Self, r2d2::Error> {
        let conn = pool.get()?;
        tracing::trace!(operation, "connection acquired");
        Ok(Self { conn, operation })
    }

    /// Name of the operation holding this scope.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Deref for ConnectionScope {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl DerefMut for ConnectionScope {
    fn deref_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

impl Drop for ConnectionScope {
    fn drop(&mut self) {
        tracing::trace!(operation = self.operation, "connection released");
    }
}
