//! Core data-access layer for the sales desk.
//! Departments and sellers, their SQLite repositories and the services
//! that front them.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DbConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::department::{Department, DepartmentId};
pub use model::seller::{Seller, SellerId};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::generic::{DataAccessError, GenericRepository, RepoResult};
pub use repo::seller_repo::{SellerRepository, SqliteSellerRepository};
pub use service::department_service::DepartmentService;
pub use service::seller_service::SellerService;
pub use service::{ServiceError, ServiceResult, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
