//! Seller entity.
//!
//! # Invariants
//! - `department.id` must name a persisted department when the seller is
//!   written. The store's foreign key enforces this, not the entity.
//! - Sellers loaded in one batch may share the same `Arc<Department>`.

use crate::model::department::{Department, DepartmentId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Store-assigned seller identifier.
pub type SellerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// `None` before the row is persisted.
    pub id: Option<SellerId>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    /// Monthly base salary, kept exact.
    pub base_salary: Decimal,
    /// Owning department. Shared, never owned by the seller.
    pub department: Arc<Department>,
}

impl Seller {
    /// Creates a not-yet-persisted seller.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Decimal,
        department: impl Into<Arc<Department>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department: department.into(),
        }
    }

    /// Returns a copy of this seller carrying `id`.
    pub fn with_id(&self, id: SellerId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    /// Returns the owning department id, if the department is persisted.
    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department.id
    }
}

#[cfg(test)]
mod tests {
    use super::Seller;
    use crate::model::department::Department;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn sample(department: Arc<Department>) -> Seller {
        Seller::new(
            "Alice",
            "alice@example.com",
            NaiveDate::from_ymd_opt(1990, 4, 21).unwrap(),
            Decimal::new(350_000, 2),
            department,
        )
    }

    #[test]
    fn new_seller_has_no_id() {
        let seller = sample(Arc::new(Department::with_id(3, "Books")));
        assert!(seller.id.is_none());
        assert_eq!(seller.department_id(), Some(3));
    }

    #[test]
    fn with_id_keeps_other_fields() {
        let seller = sample(Arc::new(Department::with_id(3, "Books")));
        let stored = seller.with_id(9);
        assert_eq!(stored.id, Some(9));
        assert_eq!(stored.name, seller.name);
        assert!(Arc::ptr_eq(&stored.department, &seller.department));
    }

    #[test]
    fn equality_compares_department_content() {
        let left = sample(Arc::new(Department::with_id(1, "Tools")));
        let right = sample(Arc::new(Department::with_id(1, "Tools")));
        assert_eq!(left, right);
    }
}
