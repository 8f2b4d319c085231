//! SQLite department repository
//!
//! Plain single-table CRUD; no joins, so no department cache.

use crate::errors::{missing_id, no_rows_affected, persistence, Result};
use crate::repo::elapsed_ms;
use crate::repo::mapper::{map_department_with, DepartmentColumns};
use rusqlite::Connection;
use sellerdesk_core::dao::DepartmentDao;
use sellerdesk_core::model::Department;
use sellerdesk_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

const OP_INSERT: &str = "department_insert";
const OP_UPDATE: &str = "department_update";
const OP_DELETE: &str = "department_delete_by_id";
const OP_FIND_BY_ID: &str = "department_find_by_id";
const OP_FIND_ALL: &str = "department_find_all";

/// Department DAO bound to a caller-owned connection
pub struct DepartmentDaoSqlite<'c> {
    conn: &'c Connection,
}

impl<'c> DepartmentDaoSqlite<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn insert_impl(&self, department: &mut Department) -> Result<i64> {
        let mut stmt = self
            .conn
            .prepare("INSERT INTO department (Name) VALUES (?1)")
            .map_err(|e| persistence(OP_INSERT, e))?;

        let affected = stmt
            .execute([&department.name])
            .map_err(|e| persistence(OP_INSERT, e))?;
        if affected == 0 {
            return Err(no_rows_affected(OP_INSERT));
        }

        let id = self.conn.last_insert_rowid();
        department.id = Some(id);
        Ok(id)
    }

    fn update_impl(&self, department: &Department) -> Result<usize> {
        let id = department
            .id
            .ok_or_else(|| missing_id(OP_UPDATE, "department"))?;

        let mut stmt = self
            .conn
            .prepare("UPDATE department SET Name = ?1 WHERE Id = ?2")
            .map_err(|e| persistence(OP_UPDATE, e))?;

        stmt.execute(rusqlite::params![department.name, id])
            .map_err(|e| persistence(OP_UPDATE, e))
    }

    fn delete_impl(&self, id: i64) -> Result<usize> {
        let mut stmt = self
            .conn
            .prepare("DELETE FROM department WHERE Id = ?1")
            .map_err(|e| persistence(OP_DELETE, e))?;

        stmt.execute([id]).map_err(|e| persistence(OP_DELETE, e))
    }

    fn find_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Id, Name FROM department WHERE Id = ?1")
            .map_err(|e| persistence(OP_FIND_BY_ID, e))?;
        let mut rows = stmt
            .query([id])
            .map_err(|e| persistence(OP_FIND_BY_ID, e))?;

        match rows.next().map_err(|e| persistence(OP_FIND_BY_ID, e))? {
            Some(row) => Ok(Some(map_department_with(row, DepartmentColumns::TABLE)?)),
            None => Ok(None),
        }
    }

    fn find_all_impl(&self) -> Result<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Id, Name FROM department ORDER BY Name, Id")
            .map_err(|e| persistence(OP_FIND_ALL, e))?;
        let mut rows = stmt.query([]).map_err(|e| persistence(OP_FIND_ALL, e))?;

        let mut departments = Vec::new();
        while let Some(row) = rows.next().map_err(|e| persistence(OP_FIND_ALL, e))? {
            departments.push(map_department_with(row, DepartmentColumns::TABLE)?);
        }
        Ok(departments)
    }
}

impl DepartmentDao for DepartmentDaoSqlite<'_> {
    fn insert(&self, department: &mut Department) -> Result<()> {
        log_op_start!(OP_INSERT, name = department.name.as_str());
        let start = Instant::now();

        let id = self.insert_impl(department).map_err(|e| {
            log_op_error!(OP_INSERT, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_INSERT,
            duration_ms = elapsed_ms(start),
            department_id = id
        );
        Ok(())
    }

    fn update(&self, department: &Department) -> Result<()> {
        log_op_start!(OP_UPDATE, department_id = ?department.id);
        let start = Instant::now();

        let affected = self.update_impl(department).map_err(|e| {
            log_op_error!(OP_UPDATE, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_UPDATE,
            duration_ms = elapsed_ms(start),
            row_count = affected as u64
        );
        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        log_op_start!(OP_DELETE, department_id = id);
        let start = Instant::now();

        let affected = self.delete_impl(id).map_err(|e| {
            log_op_error!(OP_DELETE, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_DELETE,
            duration_ms = elapsed_ms(start),
            row_count = affected as u64
        );
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Department>> {
        log_op_start!(OP_FIND_BY_ID, department_id = id);
        let start = Instant::now();

        let department = self.find_by_id_impl(id).map_err(|e| {
            log_op_error!(OP_FIND_BY_ID, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_FIND_BY_ID,
            duration_ms = elapsed_ms(start),
            found = department.is_some()
        );
        Ok(department)
    }

    fn find_all(&self) -> Result<Vec<Department>> {
        log_op_start!(OP_FIND_ALL);
        let start = Instant::now();

        let departments = self.find_all_impl().map_err(|e| {
            log_op_error!(OP_FIND_ALL, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_FIND_ALL,
            duration_ms = elapsed_ms(start),
            row_count = departments.len() as u64
        );
        Ok(departments)
    }
}
