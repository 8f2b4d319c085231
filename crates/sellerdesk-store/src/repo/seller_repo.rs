//! SQLite seller repository
//!
//! Operation pattern:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Statements and cursors are locals of the `*_impl` functions and are
//! dropped on every return path. The connection is only borrowed.

use crate::errors::{missing_id, no_rows_affected, persistence, Result};
use crate::repo::department_cache::DepartmentCache;
use crate::repo::elapsed_ms;
use crate::repo::mapper::{map_department, map_seller};
use rusqlite::{params, Connection, Rows};
use sellerdesk_core::dao::SellerDao;
use sellerdesk_core::model::{Department, Seller};
use sellerdesk_core::{log_op_end, log_op_error, log_op_start};
use sellerdesk_core_types::Sensitive;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

const OP_INSERT: &str = "seller_insert";
const OP_UPDATE: &str = "seller_update";
const OP_DELETE: &str = "seller_delete_by_id";
const OP_FIND_BY_ID: &str = "seller_find_by_id";
const OP_FIND_ALL: &str = "seller_find_all";
const OP_FIND_BY_DEPARTMENT: &str = "seller_find_by_department";

/// Seller columns plus the aliased department name
macro_rules! seller_join {
    () => {
        "SELECT seller.*, department.Name AS DepName \
         FROM seller INNER JOIN department \
         ON seller.DepartmentId = department.Id"
    };
}

const INSERT_SQL: &str = "INSERT INTO seller (Name, Email, BirthDate, BaseSalary, DepartmentId) \
     VALUES (?1, ?2, ?3, ?4, ?5)";

const UPDATE_SQL: &str = "UPDATE seller \
     SET Name = ?1, Email = ?2, BirthDate = ?3, BaseSalary = ?4, DepartmentId = ?5 \
     WHERE Id = ?6";

const DELETE_SQL: &str = "DELETE FROM seller WHERE Id = ?1";

const FIND_BY_ID_SQL: &str = concat!(seller_join!(), " WHERE seller.Id = ?1");

const FIND_ALL_SQL: &str = concat!(seller_join!(), " ORDER BY seller.Name, seller.Id");

const FIND_BY_DEPARTMENT_SQL: &str = concat!(
    seller_join!(),
    " WHERE seller.DepartmentId = ?1 ORDER BY seller.Name, seller.Id"
);

/// Seller DAO bound to a caller-owned connection
pub struct SellerDaoSqlite<'c> {
    conn: &'c Connection,
}

impl<'c> SellerDaoSqlite<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn insert_impl(&self, seller: &mut Seller) -> Result<i64> {
        let department_id = seller
            .department_id()
            .ok_or_else(|| missing_id(OP_INSERT, "department"))?;

        let mut stmt = self
            .conn
            .prepare(INSERT_SQL)
            .map_err(|e| persistence(OP_INSERT, e))?;

        let affected = stmt
            .execute(params![
                seller.name,
                seller.email,
                seller.birth_date,
                seller.base_salary.to_string(),
                department_id,
            ])
            .map_err(|e| persistence(OP_INSERT, e))?;

        if affected == 0 {
            return Err(no_rows_affected(OP_INSERT));
        }

        let id = self.conn.last_insert_rowid();
        seller.id = Some(id);
        Ok(id)
    }

    fn update_impl(&self, seller: &Seller) -> Result<usize> {
        let id = seller.id.ok_or_else(|| missing_id(OP_UPDATE, "seller"))?;
        let department_id = seller
            .department_id()
            .ok_or_else(|| missing_id(OP_UPDATE, "department"))?;

        let mut stmt = self
            .conn
            .prepare(UPDATE_SQL)
            .map_err(|e| persistence(OP_UPDATE, e))?;

        // Affected-row count is reported in the log only; a missing id is not an error
        stmt.execute(params![
            seller.name,
            seller.email,
            seller.birth_date,
            seller.base_salary.to_string(),
            department_id,
            id,
        ])
        .map_err(|e| persistence(OP_UPDATE, e))
    }

    fn delete_impl(&self, id: i64) -> Result<usize> {
        let mut stmt = self
            .conn
            .prepare(DELETE_SQL)
            .map_err(|e| persistence(OP_DELETE, e))?;

        stmt.execute([id]).map_err(|e| persistence(OP_DELETE, e))
    }

    fn find_by_id_impl(&self, id: i64) -> Result<Option<Seller>> {
        let mut stmt = self
            .conn
            .prepare(FIND_BY_ID_SQL)
            .map_err(|e| persistence(OP_FIND_BY_ID, e))?;
        let mut rows = stmt
            .query([id])
            .map_err(|e| persistence(OP_FIND_BY_ID, e))?;

        match rows.next().map_err(|e| persistence(OP_FIND_BY_ID, e))? {
            Some(row) => {
                let department = Arc::new(map_department(row)?);
                Ok(Some(map_seller(row, department)?))
            }
            None => Ok(None),
        }
    }

    fn find_all_impl(&self) -> Result<Vec<Seller>> {
        let mut stmt = self
            .conn
            .prepare(FIND_ALL_SQL)
            .map_err(|e| persistence(OP_FIND_ALL, e))?;
        let rows = stmt.query([]).map_err(|e| persistence(OP_FIND_ALL, e))?;

        collect_sellers(OP_FIND_ALL, rows)
    }

    fn find_by_department_impl(&self, department: &Department) -> Result<Vec<Seller>> {
        let department_id = department
            .id
            .ok_or_else(|| missing_id(OP_FIND_BY_DEPARTMENT, "department"))?;

        let mut stmt = self
            .conn
            .prepare(FIND_BY_DEPARTMENT_SQL)
            .map_err(|e| persistence(OP_FIND_BY_DEPARTMENT, e))?;
        let rows = stmt
            .query([department_id])
            .map_err(|e| persistence(OP_FIND_BY_DEPARTMENT, e))?;

        collect_sellers(OP_FIND_BY_DEPARTMENT, rows)
    }
}

/// Drain a join cursor into sellers, sharing one department instance per id
fn collect_sellers(op: &str, mut rows: Rows<'_>) -> Result<Vec<Seller>> {
    let mut departments = DepartmentCache::new();
    let mut sellers = Vec::new();

    while let Some(row) = rows.next().map_err(|e| persistence(op, e))? {
        let department = departments.resolve(row)?;
        sellers.push(map_seller(row, department)?);
    }

    debug!(
        query = op,
        row_count = sellers.len() as u64,
        distinct_departments = departments.len() as u64,
        "Assembled seller rows"
    );
    Ok(sellers)
}

impl SellerDao for SellerDaoSqlite<'_> {
    fn insert(&self, seller: &mut Seller) -> Result<()> {
        let email = Sensitive::new(seller.email.as_str());
        log_op_start!(OP_INSERT, email = %email.masked_email());
        let start = Instant::now();

        let id = self.insert_impl(seller).map_err(|e| {
            log_op_error!(OP_INSERT, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(OP_INSERT, duration_ms = elapsed_ms(start), seller_id = id);
        Ok(())
    }

    fn update(&self, seller: &Seller) -> Result<()> {
        log_op_start!(OP_UPDATE, seller_id = ?seller.id);
        let start = Instant::now();

        let affected = self.update_impl(seller).map_err(|e| {
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
        log_op_start!(OP_DELETE, seller_id = id);
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

    fn find_by_id(&self, id: i64) -> Result<Option<Seller>> {
        log_op_start!(OP_FIND_BY_ID, seller_id = id);
        let start = Instant::now();

        let seller = self.find_by_id_impl(id).map_err(|e| {
            log_op_error!(OP_FIND_BY_ID, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_FIND_BY_ID,
            duration_ms = elapsed_ms(start),
            found = seller.is_some()
        );
        Ok(seller)
    }

    fn find_all(&self) -> Result<Vec<Seller>> {
        log_op_start!(OP_FIND_ALL);
        let start = Instant::now();

        let sellers = self.find_all_impl().map_err(|e| {
            log_op_error!(OP_FIND_ALL, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_FIND_ALL,
            duration_ms = elapsed_ms(start),
            row_count = sellers.len() as u64
        );
        Ok(sellers)
    }

    fn find_by_department(&self, department: &Department) -> Result<Vec<Seller>> {
        log_op_start!(OP_FIND_BY_DEPARTMENT, department_id = ?department.id);
        let start = Instant::now();

        let sellers = self.find_by_department_impl(department).map_err(|e| {
            log_op_error!(OP_FIND_BY_DEPARTMENT, e, duration_ms = elapsed_ms(start));
            e
        })?;

        log_op_end!(
            OP_FIND_BY_DEPARTMENT,
            duration_ms = elapsed_ms(start),
            row_count = sellers.len() as u64
        );
        Ok(sellers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_queries_alias_department_name() {
        for sql in [FIND_BY_ID_SQL, FIND_ALL_SQL, FIND_BY_DEPARTMENT_SQL] {
            assert!(sql.contains("department.Name AS DepName"), "{}", sql);
            assert!(sql.contains("INNER JOIN department"), "{}", sql);
        }
    }

    #[test]
    fn test_listing_queries_order_by_seller_name() {
        assert!(FIND_ALL_SQL.ends_with("ORDER BY seller.Name, seller.Id"));
        assert!(FIND_BY_DEPARTMENT_SQL.ends_with("ORDER BY seller.Name, seller.Id"));
    }
}
