//! Department use-case service.

use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::DepartmentRepository;
use crate::service::{is_blank, ServiceError, ServiceResult, ValidationError};
use log::info;

/// Department service facade over repository implementations.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every department ordered by name.
    pub fn find_all(&self) -> ServiceResult<Vec<Department>> {
        Ok(self.repo.find_all()?)
    }

    pub fn find_by_id(&self, id: DepartmentId) -> ServiceResult<Option<Department>> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// Inserts `department` when it has no id, otherwise updates it.
    ///
    /// Returns the persisted value; on insert it carries the new id.
    pub fn save_or_update(&self, department: &Department) -> ServiceResult<Department> {
        validate_department(department)?;

        let saved = match department.id {
            None => self.repo.insert(department)?,
            Some(_) => {
                self.repo.update(department)?;
                department.clone()
            }
        };
        info!(
            "event=department_save module=service status=ok id={}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Deletes the persisted `department`.
    pub fn remove(&self, department: &Department) -> ServiceResult<()> {
        let id = department.id.ok_or(ServiceError::MissingId("department"))?;
        self.repo.delete_by_id(id)?;
        Ok(())
    }
}

/// Checks user-editable department fields.
pub fn validate_department(department: &Department) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();
    if is_blank(&department.name) {
        errors.add("name", "field can't be empty");
    }
    errors.into_result()
}
