//! Seller use-case service.
//!
//! # Invariants
//! - A seller is only written when its department carries an id.
//! - Email must look like `local@domain.tld`; deliverability is not checked.

use crate::model::department::Department;
use crate::model::seller::{Seller, SellerId};
use crate::repo::seller_repo::SellerRepository;
use crate::service::{is_blank, ServiceError, ServiceResult, ValidationError};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Seller service facade over repository implementations.
pub struct SellerService<R: SellerRepository> {
    repo: R,
}

impl<R: SellerRepository> SellerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every seller ordered by name, departments hydrated.
    pub fn find_all(&self) -> ServiceResult<Vec<Seller>> {
        Ok(self.repo.find_all()?)
    }

    pub fn find_by_id(&self, id: SellerId) -> ServiceResult<Option<Seller>> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// Lists sellers that belong to `department`.
    pub fn find_by_department(&self, department: &Department) -> ServiceResult<Vec<Seller>> {
        Ok(self.repo.find_by_department(department)?)
    }

    /// Inserts `seller` when it has no id, otherwise updates it.
    pub fn save_or_update(&self, seller: &Seller) -> ServiceResult<Seller> {
        validate_seller(seller)?;

        let saved = match seller.id {
            None => self.repo.insert(seller)?,
            Some(_) => {
                self.repo.update(seller)?;
                seller.clone()
            }
        };
        info!(
            "event=seller_save module=service status=ok id={}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Deletes the persisted `seller`. Missing rows are not an error.
    pub fn remove(&self, seller: &Seller) -> ServiceResult<()> {
        let id = seller.id.ok_or(ServiceError::MissingId("seller"))?;
        self.repo.delete_by_id(id)?;
        Ok(())
    }
}

/// Checks user-editable seller fields.
pub fn validate_seller(seller: &Seller) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    if is_blank(&seller.name) {
        errors.add("name", "field can't be empty");
    }

    if is_blank(&seller.email) {
        errors.add("email", "field can't be empty");
    } else if !EMAIL_RE.is_match(seller.email.trim()) {
        errors.add("email", "invalid email address");
    }

    if seller.base_salary < Decimal::ZERO {
        errors.add("base_salary", "must not be negative");
    }

    if seller.department.id.is_none() {
        errors.add("department", "department must be saved first");
    }

    errors.into_result()
}
