//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define the generic CRUD contract shared by every entity repository.
//! - Keep SQL, row mapping and statement lifetimes inside this boundary.
//!
//! # Invariants
//! - Every statement and cursor is scoped to the call that opens it.
//! - "Not found" is `Ok(None)`; only store failures and zero-row writes
//!   are errors.

pub mod department_repo;
pub mod generic;
pub mod seller_repo;
