//! SellerDesk Core - domain model and contracts of the seller data-access layer
//!
//! This crate provides:
//! - `Department` and `Seller` entities
//! - `SellerDao` / `DepartmentDao` traits implemented by storage backends
//! - The `DaoError` taxonomy shared by every backend
//! - A structured logging facility built on `tracing`
//!
//! It performs no I/O itself; `sellerdesk-store` supplies the SQLite backend.

pub mod dao;
pub mod errors;
pub mod logging_facility;
pub mod model;

#[doc(hidden)]
pub use sellerdesk_core_types as core_types;

// Re-export commonly used types
pub use dao::{DepartmentDao, SellerDao};
pub use errors::{DaoError, ErrorKind, Result};
pub use model::{Department, Seller};
