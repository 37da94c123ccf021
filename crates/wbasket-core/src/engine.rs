//! Wires the pool, schema and services together from a [`Config`].

use std::sync::Arc;

use thiserror::Error;
use wbasket_db::{create_pool, run_migrations, ConnectionScope, DbPool, MigrationError, PoolError};

use crate::auth::AuthorizationGuard;
use crate::config::Config;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::service::access::AccessControlService;
use crate::service::workbasket::WorkbasketService;

/// Errors that can occur while starting the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// No connection was available to run migrations on.
    #[error("failed to get database connection for migrations: {0}")]
    Acquire(#[from] r2d2::Error),

    /// The schema could not be brought up to date.
    #[error(transparent)]
    Migration(#[from] MigrationError),
}

/// A ready-to-use set of services sharing one connection pool.
#[derive(Clone)]
pub struct Engine {
    pool: DbPool,
    workbaskets: WorkbasketService,
    access: AccessControlService,
}

impl Engine {
    /// Opens the database named in `config`, applies pending migrations and
    /// builds the services with UUID-based ID generation.
    pub fn open(config: &Config) -> Result<Self, EngineError> {
        Self::open_with_ids(config, Arc::new(UuidIdGenerator))
    }

    /// Like [`Engine::open`], with a caller-supplied ID generator.
    pub fn open_with_ids(config: &Config, ids: Arc<dyn IdGenerator>) -> Result<Self, EngineError> {
        let pool = create_pool(&config.database.path, config.database.runtime_settings())?;

        {
            let scope = ConnectionScope::acquire(&pool, "run_migrations")?;
            let applied = run_migrations(&scope)?;
            if applied > 0 {
                tracing::info!(count = applied, "applied database migrations");
            }
        }

        let access = AccessControlService::new(pool.clone(), Arc::clone(&ids));
        let guard = AuthorizationGuard::new(config.security.enabled, access.clone());
        let workbaskets = WorkbasketService::new(pool.clone(), ids, guard);

        tracing::info!(
            path = %config.database.path,
            security_enabled = config.security.enabled,
            "workbasket engine ready"
        );

        Ok(Self {
            pool,
            workbaskets,
            access,
        })
    }

    pub fn workbaskets(&self) -> &WorkbasketService {
        &self.workbaskets
    }

    pub fn access(&self) -> &AccessControlService {
        &self.access
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
