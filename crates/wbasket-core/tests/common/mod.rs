#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::TempDir;
use wbasket_core::{Config, DatabaseConfig, Engine, IdGenerator, SecurityConfig};

/// Predictable IDs: `PREFIX:1`, `PREFIX:2`, ...
#[derive(Default)]
pub struct SequenceIds {
    next: AtomicUsize,
}

impl IdGenerator for SequenceIds {
    fn generate(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}:{n}")
    }
}

/// An engine over a fresh file database that lives as long as this value.
pub struct TestEngine {
    pub engine: Engine,
    _dir: TempDir,
}

impl std::ops::Deref for TestEngine {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        &self.engine
    }
}

pub fn engine(security_enabled: bool) -> TestEngine {
    engine_with_pool_size(security_enabled, 2)
}

pub fn engine_with_pool_size(security_enabled: bool, pool_max_size: u32) -> TestEngine {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let config = Config {
        database: DatabaseConfig {
            path: dir
                .path()
                .join("wbasket.db")
                .to_str()
                .expect("utf-8 path")
                .to_string(),
            pool_max_size,
            acquire_timeout_ms: 2_000,
            ..DatabaseConfig::default()
        },
        security: SecurityConfig {
            enabled: security_enabled,
        },
        ..Config::default()
    };
    let engine = Engine::open_with_ids(&config, Arc::new(SequenceIds::default()))
        .expect("engine should open");
    TestEngine { engine, _dir: dir }
}

/// `(rowid, target)` of every link from `source`, ordered by target.
pub fn link_rows(engine: &Engine, source: &str) -> Vec<(i64, String)> {
    let conn = engine.pool().get().expect("should get connection");
    let mut stmt = conn
        .prepare(
            "SELECT rowid, TARGET_ID FROM DISTRIBUTION_TARGETS WHERE SOURCE_ID = ?1 ORDER BY TARGET_ID",
        )
        .expect("should prepare");
    stmt.query_map([source], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("should query")
        .map(|r| r.expect("row should map"))
        .collect()
}

/// Targets linked from `source`, sorted.
pub fn targets_of(engine: &Engine, source: &str) -> Vec<String> {
    link_rows(engine, source).into_iter().map(|(_, t)| t).collect()
}

pub fn count_rows(engine: &Engine, sql: &str, id: &str) -> i64 {
    let conn = engine.pool().get().expect("should get connection");
    conn.query_row(sql, [id], |row| row.get(0))
        .expect("count should succeed")
}

pub fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}
