pub mod config;
pub mod error;
pub mod infra;

use clap::Parser;
use config::DbConfig;
use error::AppError;
use infra::{schema, Database};

/// Resolve the store location, open it and report what it holds.
pub fn run() -> Result<(), AppError> {
    let cfg = DbConfig::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let db = Database::new(&cfg.path)?;
    for table in schema::TABLES {
        log::info!("{}: {} rows", table, db.table_count(table)?);
    }
    Ok(())
}
