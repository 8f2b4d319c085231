use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::department::Department;

/// Seller - a salesperson belonging to exactly one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Store-assigned identifier (None until the seller is inserted)
    pub id: Option<i64>,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Base monthly salary
    pub base_salary: Decimal,

    /// Owning department; may be shared with other sellers from the same query
    pub department: Arc<Department>,
}

impl Seller {
    /// Create a seller that has not been persisted yet
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Decimal,
        department: Arc<Department>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    /// Set the identifier, consuming and returning self
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Identifier of the owning department, if it has one
    pub fn department_id(&self) -> Option<i64> {
        self.department.id
    }

    /// Check if both sellers point at the same department instance
    pub fn shares_department_with(&self, other: &Seller) -> bool {
        Arc::ptr_eq(&self.department, &other.department)
    }
}
