//! SellerDesk Store - SQLite backend for the seller data-access layer
//!
//! Provides:
//! - Connection opening/configuration for the caller that owns the connection
//! - Embedded, idempotent bootstrap schema
//! - Row mapper and per-query department cache for join results
//! - `SellerDao` / `DepartmentDao` implementations over a borrowed connection

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use db::DbConfig;
pub use errors::Result;
pub use repo::{DaoFactory, DepartmentDaoSqlite, SellerDaoSqlite};
pub use schema::bootstrap_schema;
