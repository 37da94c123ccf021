//! Workbasket services: lifecycle, distribution routing and access control.
//!
//! Builds on the statements of `wbasket-sql` and the pool and connection
//! scope of `wbasket-db`:
//!
//! | Type | Role |
//! |------|------|
//! | [`WorkbasketService`] | Create, read, update and delete workbaskets; reconcile distribution targets. |
//! | [`AccessControlService`] | CRUD over access items and the permission lookup used by the guard. |
//! | [`AuthorizationGuard`] | Presence check of a permission for a principal, with a global bypass. |
//! | [`Engine`] | Opens the database from a [`Config`] and wires the services. |
//!
//! The caller's identity is never ambient: operations that need it take a
//! [`PrincipalContext`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use wbasket_core::{load_config, Engine, PrincipalContext, Permission, Workbasket};
//!
//! let engine = Engine::open(&load_config(Some("wbasket.toml"))?)?;
//! let ctx = PrincipalContext::new("teamlead_1").with_groups(["group_1"]);
//!
//! let inbox = engine
//!     .workbaskets()
//!     .create(Workbasket::new("", "Inbox").with_targets(["WBI-ESCALATION"]))?;
//! engine.workbaskets().check_authorization(&inbox.id, Permission::Distribute, &ctx)?;
//! ```

mod auth;
mod config;
mod engine;
mod error;
mod ids;
mod model;
mod service;
mod store;
mod telemetry;

pub use auth::AuthorizationGuard;
pub use config::{
    load_config, Config, ConfigError, DatabaseConfig, LoggingConfig, SecurityConfig,
};
pub use engine::{Engine, EngineError};
pub use error::ServiceError;
pub use ids::{IdGenerator, UuidIdGenerator};
pub use model::{AccessItem, Workbasket};
pub use service::access::AccessControlService;
pub use service::reconcile::{plan_reconciliation, ReconciliationPlan};
pub use service::workbasket::WorkbasketService;
pub use telemetry::{init_tracing, TelemetryError};
pub use wbasket_types::{Permission, PrincipalContext};
