//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `salesdesk_core` linkage and database bootstrap from a shell.
//! - Print department and seller listings (ids and names only).
//!
//! Usage: `salesdesk_cli [config.json]`. Without a config an empty in-memory
//! database is opened.

use salesdesk_core::db::{open_db_in_memory, open_db_with_config};
use salesdesk_core::{
    core_version, DbConfig, GenericRepository, SqliteDepartmentRepository,
    SqliteSellerRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("salesdesk_core version={}", core_version());

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<String>) -> Result<(), Box<dyn Error>> {
    let conn = match config_path {
        Some(path) => open_db_with_config(&DbConfig::load(path)?)?,
        None => open_db_in_memory()?,
    };

    let departments = SqliteDepartmentRepository::try_new(&conn)?.find_all()?;
    println!("departments={}", departments.len());
    for department in &departments {
        println!("  {} {}", department.id.unwrap_or_default(), department.name);
    }

    let sellers = SqliteSellerRepository::try_new(&conn)?.find_all()?;
    println!("sellers={}", sellers.len());
    for seller in &sellers {
        println!(
            "  {} {} ({})",
            seller.id.unwrap_or_default(),
            seller.name,
            seller.department.name
        );
    }

    Ok(())
}
