use rusqlite::Connection;
use salesdesk_core::db::schema::SCHEMA_VERSION;
use salesdesk_core::db::{open_db, open_db_in_memory, open_db_with_config, DbError};
use salesdesk_core::{DbConfig, Department, GenericRepository, SqliteDepartmentRepository};

#[test]
fn open_db_in_memory_installs_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_table_exists(&conn, "department");
    assert_table_exists(&conn, "seller");
    let foreign_keys: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(foreign_keys, 1);
}

#[test]
fn reopening_file_database_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();
        repo.insert(&Department::new("Books")).unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();
    let names: Vec<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|department| department.name)
        .collect();
    assert_eq!(names, ["Books"]);
}

#[test]
fn open_with_config_uses_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.db");
    let raw = serde_json::json!({
        "db_path": path.to_str().unwrap(),
        "busy_timeout_ms": 1000,
    })
    .to_string();

    let config = DbConfig::from_json_str(&raw).unwrap();
    let conn = open_db_with_config(&config).unwrap();
    assert_table_exists(&conn, "seller");
    assert!(path.exists());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            supported,
        } => {
            assert_eq!(db_version, 99);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
