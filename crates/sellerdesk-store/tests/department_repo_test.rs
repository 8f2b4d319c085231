// Integration tests for the department repository

use rusqlite::Connection;
use sellerdesk_core::errors::{DaoError, ErrorKind};
use sellerdesk_core::model::{Department, Seller};
use sellerdesk_core::{DepartmentDao, SellerDao};
use sellerdesk_store::{DepartmentDaoSqlite, SellerDaoSqlite};
use std::sync::Arc;

fn setup_test_db() -> Connection {
    let conn = sellerdesk_store::db::open_in_memory().unwrap();
    sellerdesk_store::bootstrap_schema(&conn).unwrap();
    conn
}

#[test]
fn test_insert_assigns_sequential_ids() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    let mut computers = Department::new("Computers");
    let mut books = Department::new("Books");
    dao.insert(&mut computers).unwrap();
    dao.insert(&mut books).unwrap();

    assert_eq!(computers.id, Some(1));
    assert_eq!(books.id, Some(2));
}

#[test]
fn test_find_by_id() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    let mut fashion = Department::new("Fashion");
    dao.insert(&mut fashion).unwrap();

    assert_eq!(dao.find_by_id(fashion.id.unwrap()).unwrap(), Some(fashion));
    assert_eq!(dao.find_by_id(999).unwrap(), None);
}

#[test]
fn test_find_all_orders_by_name() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    for name in ["Electronics", "Books", "Fashion", "Computers"] {
        dao.insert(&mut Department::new(name)).unwrap();
    }

    let names: Vec<String> = dao.find_all().unwrap().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Books", "Computers", "Electronics", "Fashion"]);
}

#[test]
fn test_update_renames() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    let mut dep = Department::new("Books");
    dao.insert(&mut dep).unwrap();

    dep.name = "Rare Books".to_string();
    dao.update(&dep).unwrap();

    assert_eq!(dao.find_by_id(dep.id.unwrap()).unwrap().unwrap().name, "Rare Books");
}

#[test]
fn test_update_missing_row_is_no_op() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    dao.update(&Department::with_id(42, "Nobody")).unwrap();
    assert!(dao.find_all().unwrap().is_empty());
}

#[test]
fn test_update_without_id_is_invalid_input() {
    let conn = setup_test_db();
    let err = DepartmentDaoSqlite::new(&conn)
        .update(&Department::new("Unsaved"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.message(), "department id is not set");
}

#[test]
fn test_delete_by_id() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    let mut dep = Department::new("Books");
    dao.insert(&mut dep).unwrap();

    dao.delete_by_id(999).unwrap();
    assert_eq!(dao.find_all().unwrap().len(), 1);

    dao.delete_by_id(dep.id.unwrap()).unwrap();
    assert!(dao.find_all().unwrap().is_empty());
}

#[test]
fn test_delete_referenced_department_is_rejected() {
    let conn = setup_test_db();
    let dao = DepartmentDaoSqlite::new(&conn);

    let mut dep = Department::new("Computers");
    dao.insert(&mut dep).unwrap();
    let dep = Arc::new(dep);

    let mut bob = Seller::new(
        "Bob",
        "bob@x.com",
        chrono::NaiveDate::from_ymd_opt(1998, 5, 1).unwrap(),
        rust_decimal::Decimal::new(2000, 0),
        dep.clone(),
    );
    SellerDaoSqlite::new(&conn).insert(&mut bob).unwrap();

    // Given a seller still points at it, the department cannot go
    let err = dao.delete_by_id(dep.id.unwrap()).unwrap_err();
    assert!(
        matches!(&err, DaoError::Persistence { op, .. } if op == "department_delete_by_id"),
        "unexpected error: {:?}",
        err
    );
    assert!(dao.find_by_id(dep.id.unwrap()).unwrap().is_some());
}
