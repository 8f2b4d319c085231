//! Per-query department identity map
//!
//! A listing query returns one row per seller, repeating the department
//! columns. The cache makes every row with the same `DepartmentId` resolve to
//! one `Arc<Department>`, so sellers in a result set share their department
//! instance. A cache lives for exactly one repository call: create it inside
//! the call and let it drop with the call.

use crate::errors::Result;
use crate::repo::mapper::{columns, map_department};
use crate::repo::row::NamedRow;
use sellerdesk_core::model::Department;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct DepartmentCache {
    by_id: HashMap<i64, Arc<Department>>,
}

impl DepartmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<Arc<Department>> {
        self.by_id.get(&id).cloned()
    }

    pub fn put(&mut self, id: i64, department: Arc<Department>) {
        self.by_id.insert(id, department);
    }

    /// Department for the row's `DepartmentId`, mapping the row on first sight
    pub fn resolve<R: NamedRow + ?Sized>(&mut self, row: &R) -> Result<Arc<Department>> {
        let id = row.integer(columns::DEPARTMENT_ID)?;
        if let Some(department) = self.get(id) {
            return Ok(department);
        }

        let department = Arc::new(map_department(row)?);
        self.put(id, department.clone());
        Ok(department)
    }

    /// Number of distinct departments seen
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
