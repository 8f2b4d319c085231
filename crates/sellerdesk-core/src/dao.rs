//! Data-access contracts for sellers and departments.
//!
//! Implementations are bound to a caller-owned connection and must not be
//! used from more than one thread at a time. Point lookups report a missing
//! row as `Ok(None)`; `Err` is reserved for real failures.

use crate::errors::Result;
use crate::model::{Department, Seller};

/// Seller persistence and relationship-aware queries.
pub trait SellerDao {
    /// Insert a new seller and store the generated identifier in `seller.id`.
    ///
    /// # Errors
    ///
    /// `DaoError::InvalidInput` if the seller's department has no id,
    /// `DaoError::Persistence` if the store fails or affects zero rows.
    fn insert(&self, seller: &mut Seller) -> Result<()>;

    /// Overwrite every mutable column of the row identified by `seller.id`.
    ///
    /// Succeeds without effect if no such row exists.
    ///
    /// # Errors
    ///
    /// `DaoError::InvalidInput` if `seller.id` or the department id is unset,
    /// `DaoError::Persistence` if the store fails.
    fn update(&self, seller: &Seller) -> Result<()>;

    /// Delete the seller with the given id. Succeeds if no such row exists.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` if the store fails.
    fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Load one seller together with its department.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` or `DaoError::Mapping` on failure.
    fn find_by_id(&self, id: i64) -> Result<Option<Seller>>;

    /// Load every seller ordered by name. Sellers of the same department
    /// share one `Arc<Department>`.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` or `DaoError::Mapping` on failure.
    fn find_all(&self) -> Result<Vec<Seller>>;

    /// Load the sellers of one department ordered by name, all sharing one
    /// `Arc<Department>`.
    ///
    /// # Errors
    ///
    /// `DaoError::InvalidInput` if `department.id` is unset,
    /// `DaoError::Persistence` or `DaoError::Mapping` on failure.
    fn find_by_department(&self, department: &Department) -> Result<Vec<Seller>>;
}

/// Department persistence.
pub trait DepartmentDao {
    /// Insert a new department and store the generated identifier in `department.id`.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` if the store fails or affects zero rows.
    fn insert(&self, department: &mut Department) -> Result<()>;

    /// Rename the department identified by `department.id`.
    ///
    /// # Errors
    ///
    /// `DaoError::InvalidInput` if `department.id` is unset,
    /// `DaoError::Persistence` if the store fails.
    fn update(&self, department: &Department) -> Result<()>;

    /// Delete the department with the given id. Succeeds if no such row exists.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` if the store fails, including when sellers
    /// still reference the department.
    fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Load one department.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` or `DaoError::Mapping` on failure.
    fn find_by_id(&self, id: i64) -> Result<Option<Department>>;

    /// Load every department ordered by name.
    ///
    /// # Errors
    ///
    /// `DaoError::Persistence` or `DaoError::Mapping` on failure.
    fn find_all(&self) -> Result<Vec<Department>>;
}
