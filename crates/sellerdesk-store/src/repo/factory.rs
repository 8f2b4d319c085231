//! DAO factory
//!
//! Hands out DAO instances bound to one caller-owned connection. Callers
//! depend on the returned trait types, not on the SQLite structs.

use crate::repo::{DepartmentDaoSqlite, SellerDaoSqlite};
use rusqlite::Connection;
use sellerdesk_core::dao::{DepartmentDao, SellerDao};

#[derive(Clone, Copy)]
pub struct DaoFactory<'c> {
    conn: &'c Connection,
}

impl<'c> DaoFactory<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn seller_dao(&self) -> impl SellerDao + 'c {
        SellerDaoSqlite::new(self.conn)
    }

    pub fn department_dao(&self) -> impl DepartmentDao + 'c {
        DepartmentDaoSqlite::new(self.conn)
    }
}
