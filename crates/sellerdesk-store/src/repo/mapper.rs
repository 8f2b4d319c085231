//! Row mapper - rebuilds Department and Seller values from result rows
//!
//! Join queries select `seller.*` plus `department.Name AS DepName`, so a
//! single row carries both entities. Both tables have a `Name` column; the
//! alias is what lets the department name be read without colliding with the
//! seller's. Every join query in this crate must keep that alias.

use crate::errors::Result;
use crate::repo::row::NamedRow;
use sellerdesk_core::model::{Department, Seller};
use std::sync::Arc;

/// Column names shared by the queries and the mapper
pub mod columns {
    pub const ID: &str = "Id";
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const BIRTH_DATE: &str = "BirthDate";
    pub const BASE_SALARY: &str = "BaseSalary";
    pub const DEPARTMENT_ID: &str = "DepartmentId";
    /// Alias of `department.Name` in seller join queries
    pub const DEPARTMENT_NAME: &str = "DepName";
}

/// Which columns hold a department's id and name in a given row shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentColumns {
    pub id: &'static str,
    pub name: &'static str,
}

impl DepartmentColumns {
    /// Seller/department join rows: `DepartmentId`, `DepName`
    pub const JOINED: Self = Self {
        id: columns::DEPARTMENT_ID,
        name: columns::DEPARTMENT_NAME,
    };

    /// Plain `department` table rows: `Id`, `Name`
    pub const TABLE: Self = Self {
        id: columns::ID,
        name: columns::NAME,
    };
}

/// Build a Department from a seller/department join row
pub fn map_department<R: NamedRow + ?Sized>(row: &R) -> Result<Department> {
    map_department_with(row, DepartmentColumns::JOINED)
}

/// Build a Department from the given column pair
pub fn map_department_with<R: NamedRow + ?Sized>(
    row: &R,
    columns: DepartmentColumns,
) -> Result<Department> {
    Ok(Department::with_id(
        row.integer(columns.id)?,
        row.text(columns.name)?,
    ))
}

/// Build a Seller from a join row, attaching `department` as-is
pub fn map_seller<R: NamedRow + ?Sized>(row: &R, department: Arc<Department>) -> Result<Seller> {
    Ok(Seller {
        id: Some(row.integer(columns::ID)?),
        name: row.text(columns::NAME)?,
        email: row.text(columns::EMAIL)?,
        birth_date: row.date(columns::BIRTH_DATE)?,
        base_salary: row.decimal(columns::BASE_SALARY)?,
        department,
    })
}


#[cfg(test)]
mod tests {
    use super::fixture::{joined_row, MapRow};
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sellerdesk_core::errors::ErrorKind;
    use std::str::FromStr;

    #[test]
    fn test_map_department_uses_alias_not_seller_name() {
        let row = joined_row(7, "Bob", 1, "Computers");
        let dep = map_department(&row).unwrap();
        assert_eq!(dep, Department::with_id(1, "Computers"));
    }

    #[test]
    fn test_map_department_with_table_columns() {
        let row = MapRow::default()
            .with(columns::ID, "4")
            .with(columns::NAME, "Books");
        let dep = map_department_with(&row, DepartmentColumns::TABLE).unwrap();
        assert_eq!(dep, Department::with_id(4, "Books"));
    }

    #[test]
    fn test_map_department_without_alias_fails() {
        let mut without_alias = joined_row(7, "Bob", 1, "Computers");
        without_alias.0.remove(columns::DEPARTMENT_NAME);

        let err = map_department(&without_alias).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Mapping);
        assert!(err.to_string().contains("DepName"));
    }

    #[test]
    fn test_map_seller_reads_every_field() {
        let row = joined_row(7, "Bob", 1, "Computers");
        let dep = Arc::new(Department::with_id(1, "Computers"));

        let seller = map_seller(&row, dep.clone()).unwrap();

        assert_eq!(seller.id, Some(7));
        assert_eq!(seller.name, "Bob");
        assert_eq!(seller.email, "bob@x.com");
        assert_eq!(
            seller.birth_date,
            NaiveDate::from_ymd_opt(1998, 5, 1).unwrap()
        );
        assert_eq!(seller.base_salary, Decimal::from_str("2000.00").unwrap());
        assert!(Arc::ptr_eq(&seller.department, &dep));
    }

    #[test]
    fn test_map_seller_attaches_given_department_unconditionally() {
        // Row says department 1, caller passes department 9: the mapper does
        // not second-guess the reference it is given.
        let row = joined_row(7, "Bob", 1, "Computers");
        let other = Arc::new(Department::with_id(9, "Elsewhere"));

        let seller = map_seller(&row, other.clone()).unwrap();
        assert!(Arc::ptr_eq(&seller.department, &other));
    }
}
