use wbasket_db::{create_pool, run_migrations, ConnectionScope, DbRuntimeSettings};

#[test]
fn db_initialization_works() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("init.db");
    let pool = create_pool(
        path.to_str().expect("utf-8 path"),
        DbRuntimeSettings::default(),
    )
    .expect("failed to create pool");

    let scope = ConnectionScope::acquire(&pool, "migrate").expect("failed to get connection");
    let applied = run_migrations(&scope).expect("failed to run migrations");
    assert_eq!(applied, 3);

    let mut stmt = scope
        .prepare(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .expect("failed to prepare table query");
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("failed to execute table query")
        .map(|r| r.expect("failed to read table name"))
        .collect();

    assert_eq!(
        tables,
        vec![
            "DISTRIBUTION_TARGETS",
            "WORKBASKET",
            "WORKBASKET_ACCESS_LIST",
            "_wbasket_migrations",
        ]
    );
}

#[test]
fn pooled_connections_share_a_file_database() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("shared.db");
    let pool = create_pool(
        path.to_str().expect("utf-8 path"),
        DbRuntimeSettings {
            pool_max_size: 2,
            ..DbRuntimeSettings::default()
        },
    )
    .expect("failed to create pool");

    let first = ConnectionScope::acquire(&pool, "writer").expect("failed to get connection");
    run_migrations(&first).expect("failed to run migrations");
    first
        .execute(
            "INSERT INTO WORKBASKET (ID, CREATED, MODIFIED, NAME) VALUES ('WBI-1', 't', 't', 'one')",
            [],
        )
        .expect("insert should succeed");

    let second = ConnectionScope::acquire(&pool, "reader").expect("failed to get connection");
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM WORKBASKET", [], |row| row.get(0))
        .expect("count should succeed");
    assert_eq!(count, 1);
}
