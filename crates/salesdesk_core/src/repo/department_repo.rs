//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map `department(Id, Name)` rows to `Department` values.
//!
//! # Invariants
//! - `find_all` is ordered by `Name ASC, Id ASC`.
//! - Deleting a department still referenced by sellers fails at the store.

use crate::model::department::{Department, DepartmentId};
use crate::repo::generic::{
    ensure_connection_ready, expect_rows_affected, GenericRepository, RepoResult,
};
use log::{debug, info};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT Id, Name FROM department";

/// Repository interface for departments. Adds nothing to the generic contract.
pub trait DepartmentRepository: GenericRepository<Department> {}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Binds a repository to a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["department"])?;
        Ok(Self { conn })
    }
}

impl GenericRepository<Department> for SqliteDepartmentRepository<'_> {
    fn insert(&self, department: &Department) -> RepoResult<Department> {
        let changed = self.conn.execute(
            "INSERT INTO department (Name) VALUES (?1);",
            [department.name.as_str()],
        )?;
        expect_rows_affected(changed, "department", "insert")?;

        let id = self.conn.last_insert_rowid();
        info!("event=department_insert module=repo status=ok id={id}");
        Ok(Department::with_id(id, department.name.clone()))
    }

    fn update(&self, department: &Department) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE department SET Name = ?1 WHERE Id = ?2;",
            params![department.name.as_str(), department.id],
        )?;
        expect_rows_affected(changed, "department", "update")?;

        info!(
            "event=department_update module=repo status=ok id={}",
            department.id.unwrap_or_default()
        );
        Ok(())
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM department WHERE Id = ?1;", [id])?;
        info!("event=department_delete module=repo status=ok id={id} rows={changed}");
        Ok(())
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE Id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY Name ASC, Id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        debug!(
            "event=department_find_all module=repo status=ok count={}",
            departments.len()
        );
        Ok(departments)
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department {
        id: Some(row.get("Id")?),
        name: row.get("Name")?,
    })
}
