//! Department entity.

use serde::{Deserialize, Serialize};

/// Store-assigned department identifier.
pub type DepartmentId = i64;

/// Organizational unit that owns sellers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    /// `None` before the row is persisted.
    pub id: Option<DepartmentId>,
    pub name: String,
}

impl Department {
    /// Creates a not-yet-persisted department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a department for an existing row.
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns whether the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
