//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Offer `find_all/save_or_update/remove` entry points to UI callers.
//! - Validate user input before it reaches the repository layer.
//!
//! # Invariants
//! - Services never bypass repository contracts.
//! - Validation failures never touch the store.

use crate::repo::generic::DataAccessError;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_service;
pub mod seller_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Per-field validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. A later message replaces an earlier one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Ok(())` when no message was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed")?;
        for (index, (field, message)) in self.errors.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{field}: {message}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Service error for department/seller use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected before persistence.
    Validation(ValidationError),
    /// Persistence-layer failure.
    DataAccess(DataAccessError),
    /// Operation needs a persisted entity but got one without id.
    MissingId(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DataAccess(err) => write!(f, "{err}"),
            Self::MissingId(entity) => write!(f, "{entity} has no id"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DataAccess(err) => Some(err),
            Self::MissingId(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DataAccessError> for ServiceError {
    fn from(value: DataAccessError) -> Self {
        Self::DataAccess(value)
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
