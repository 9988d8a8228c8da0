//! Domain entities persisted by the repositories.
//!
//! # Responsibility
//! - Define plain data holders for departments and sellers.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on insert.
//! - Every seller references exactly one department.

pub mod department;
pub mod seller;
