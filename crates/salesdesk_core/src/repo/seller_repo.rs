//! Seller repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map joined `seller`/`department` rows to `Seller` values with a
//!   hydrated `Department`.
//! - Bind the owning department id on every write.
//!
//! # Invariants
//! - Every read joins `department`, so one round trip yields both entities.
//! - Within one bulk read, sellers of the same department share one
//!   `Arc<Department>`.
//! - The department row is never written or existence-checked here; a
//!   dangling `DepartmentId` surfaces as a store constraint violation.
//! - `delete_by_id` never fails on a missing id.

use crate::model::department::{Department, DepartmentId};
use crate::model::seller::{Seller, SellerId};
use crate::repo::generic::{
    ensure_connection_ready, expect_rows_affected, DataAccessError, GenericRepository, RepoResult,
};
use log::{debug, info, warn};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

const SELLER_SELECT_SQL: &str = "SELECT
    s.Id AS Id,
    s.Name AS Name,
    s.Email AS Email,
    s.BirthDate AS BirthDate,
    s.BaseSalary AS BaseSalary,
    s.DepartmentId AS DepartmentId,
    d.Name AS DepName
FROM seller AS s
INNER JOIN department AS d ON s.DepartmentId = d.Id";

/// Repository interface for sellers.
pub trait SellerRepository: GenericRepository<Seller> {
    /// Lists sellers of `department` ordered by name. Empty when none match.
    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>>;
}

/// SQLite-backed seller repository.
pub struct SqliteSellerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSellerRepository<'conn> {
    /// Binds a repository to a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["department", "seller"])?;
        Ok(Self { conn })
    }
}

impl GenericRepository<Seller> for SqliteSellerRepository<'_> {
    fn insert(&self, seller: &Seller) -> RepoResult<Seller> {
        let result = self.conn.execute(
            "INSERT INTO seller (
                Name,
                Email,
                BirthDate,
                BaseSalary,
                DepartmentId
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                seller.name.as_str(),
                seller.email.as_str(),
                seller.birth_date,
                seller.base_salary.to_string(),
                seller.department_id(),
            ],
        );
        let changed = log_write_failure(result, "seller_insert")?;
        expect_rows_affected(changed, "seller", "insert")?;

        let id = self.conn.last_insert_rowid();
        info!(
            "event=seller_insert module=repo status=ok id={id} department_id={}",
            seller.department_id().unwrap_or_default()
        );
        Ok(seller.with_id(id))
    }

    fn update(&self, seller: &Seller) -> RepoResult<()> {
        let result = self.conn.execute(
            "UPDATE seller
             SET
                Name = ?1,
                Email = ?2,
                BirthDate = ?3,
                BaseSalary = ?4,
                DepartmentId = ?5
             WHERE Id = ?6;",
            params![
                seller.name.as_str(),
                seller.email.as_str(),
                seller.birth_date,
                seller.base_salary.to_string(),
                seller.department_id(),
                seller.id,
            ],
        );
        let changed = log_write_failure(result, "seller_update")?;
        expect_rows_affected(changed, "seller", "update")?;

        info!(
            "event=seller_update module=repo status=ok id={}",
            seller.id.unwrap_or_default()
        );
        Ok(())
    }

    fn delete_by_id(&self, id: SellerId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM seller WHERE Id = ?1;", [id])?;
        info!("event=seller_delete module=repo status=ok id={id} rows={changed}");
        Ok(())
    }

    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_SELECT_SQL} WHERE s.Id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            let department = Arc::new(parse_department_columns(row)?);
            return Ok(Some(parse_seller_row(row, department)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_SELECT_SQL} ORDER BY s.Name ASC, s.Id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut sellers = Vec::new();
        let mut departments: HashMap<DepartmentId, Arc<Department>> = HashMap::new();

        while let Some(row) = rows.next()? {
            let department_id: DepartmentId = row.get("DepartmentId")?;
            let department = match departments.entry(department_id) {
                Entry::Occupied(entry) => Arc::clone(entry.get()),
                Entry::Vacant(entry) => {
                    Arc::clone(entry.insert(Arc::new(parse_department_columns(row)?)))
                }
            };
            sellers.push(parse_seller_row(row, department)?);
        }

        debug!(
            "event=seller_find_all module=repo status=ok count={} departments={}",
            sellers.len(),
            departments.len()
        );
        Ok(sellers)
    }
}

impl SellerRepository for SqliteSellerRepository<'_> {
    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>> {
        let Some(department_id) = department.id else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(&format!(
            "{SELLER_SELECT_SQL}
             WHERE s.DepartmentId = ?1
             ORDER BY s.Name ASC, s.Id ASC;"
        ))?;

        let mut rows = stmt.query([department_id])?;
        let mut sellers = Vec::new();

        // Every row carries the same department, so hydrate it once.
        let Some(first) = rows.next()? else {
            return Ok(sellers);
        };
        let found = Arc::new(parse_department_columns(first)?);
        sellers.push(parse_seller_row(first, Arc::clone(&found))?);

        while let Some(row) = rows.next()? {
            sellers.push(parse_seller_row(row, Arc::clone(&found))?);
        }

        debug!(
            "event=seller_find_by_department module=repo status=ok department_id={department_id} count={}",
            sellers.len()
        );
        Ok(sellers)
    }
}

fn parse_department_columns(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department {
        id: Some(row.get("DepartmentId")?),
        name: row.get("DepName")?,
    })
}

fn parse_seller_row(row: &Row<'_>, department: Arc<Department>) -> RepoResult<Seller> {
    let salary_text: String = row.get("BaseSalary")?;
    let base_salary = Decimal::from_str(&salary_text).map_err(|_| {
        DataAccessError::InvalidData(format!(
            "invalid decimal `{salary_text}` in seller.BaseSalary"
        ))
    })?;

    Ok(Seller {
        id: Some(row.get("Id")?),
        name: row.get("Name")?,
        email: row.get("Email")?,
        birth_date: row.get("BirthDate")?,
        base_salary,
        department,
    })
}

fn log_write_failure(result: rusqlite::Result<usize>, event: &'static str) -> RepoResult<usize> {
    result.map_err(|err| {
        let err = DataAccessError::from(err);
        warn!(
            "event={event} module=repo status=error constraint={} error={}",
            err.is_constraint_violation(),
            err
        );
        err
    })
}
