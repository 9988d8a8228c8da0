//! Generic repository contract and the data-access error type.
//!
//! # Responsibility
//! - Declare the `insert/update/delete_by_id/find_by_id/find_all` contract.
//! - Translate SQLite failures into `DataAccessError`.
//! - Verify that a connection is bootstrapped before a repository binds to it.

use crate::db::schema::{schema_version, SCHEMA_VERSION};
use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, DataAccessError>;

/// Failure raised by repository operations.
#[derive(Debug)]
pub enum DataAccessError {
    /// The store rejected or failed the statement.
    Db(DbError),
    /// An insert or update touched no rows.
    NoRowsAffected {
        entity: &'static str,
        operation: &'static str,
    },
    /// Connection schema is not at the expected version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// A persisted value could not be decoded.
    InvalidData(String),
}

impl Display for DataAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "data access failed: {err}"),
            Self::NoRowsAffected { entity, operation } => {
                write!(f, "unexpected error: {operation} on {entity} affected no rows")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for DataAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NoRowsAffected { .. } => None,
            Self::UninitializedConnection { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for DataAccessError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DataAccessError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl DataAccessError {
    /// Returns whether the store rejected the write because of a constraint
    /// (foreign key, `NOT NULL`, ...).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Db(DbError::Sqlite(rusqlite::Error::SqliteFailure(err, _)))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

/// CRUD contract shared by every entity repository.
///
/// Implementations bind to one connection and are not meant for concurrent
/// use. Each call is one blocking round trip.
pub trait GenericRepository<T> {
    /// Persists a new row and returns `entity` with the store-generated id.
    /// The id carried by `entity`, if any, is ignored.
    fn insert(&self, entity: &T) -> RepoResult<T>;
    /// Rewrites every mutable column of the row keyed by the entity id.
    fn update(&self, entity: &T) -> RepoResult<()>;
    /// Removes the row if present.
    fn delete_by_id(&self, id: i64) -> RepoResult<()>;
    fn find_by_id(&self, id: i64) -> RepoResult<Option<T>>;
    /// Returns every row ordered by name.
    fn find_all(&self) -> RepoResult<Vec<T>>;
}

/// Fails unless `conn` carries the current schema and `tables` exist.
pub(crate) fn ensure_connection_ready(conn: &Connection, tables: &[&str]) -> RepoResult<()> {
    let actual_version = schema_version(conn)?;
    if actual_version != SCHEMA_VERSION {
        return Err(DataAccessError::UninitializedConnection {
            expected_version: SCHEMA_VERSION,
            actual_version,
        });
    }

    for table in tables {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(DataAccessError::InvalidData(format!(
                "required table `{table}` is missing"
            )));
        }
    }

    Ok(())
}

/// Maps an affected-row count to `NoRowsAffected` when nothing changed.
pub(crate) fn expect_rows_affected(
    changed: usize,
    entity: &'static str,
    operation: &'static str,
) -> RepoResult<()> {
    if changed == 0 {
        return Err(DataAccessError::NoRowsAffected { entity, operation });
    }
    Ok(())
}
