//! Infrastructure: SQLite connection, schema and seed data.

pub mod db;
pub mod schema;

pub use db::{Database, Row, DEFAULT_DB_PATH};
