//! Table definitions and seed rows for the shipments store.

use sha2::{Digest, Sha256};

/// Tables and indexes; safe to run on every startup.
pub const INIT_SQL: &str = include_str!("../../migrations/0001_init.sql");

/// Tables created by [`INIT_SQL`], referenced tables first.
pub const TABLES: &[&str] = &[
    "products",
    "farmers",
    "shipments",
    "shipment_products",
    "farmer_purchases",
    "transfers",
    "returns",
    "users",
];

pub const ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "password123";

pub const SEED_PRODUCTS: &[&str] = &["Tomato", "Potato", "Onion"];
pub const SEED_FARMERS: &[&str] = &["Farmer A", "Farmer B", "Farmer C"];

/// Lowercase hex SHA-256 of the password bytes.
pub fn hash_password(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn verify_password(plain: &str, password_hash: &str) -> bool {
    hash_password(plain) == password_hash
}
