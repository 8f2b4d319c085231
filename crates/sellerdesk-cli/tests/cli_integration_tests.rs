//! CLI integration tests
//!
//! Drive the `sellerdesk` binary end to end against a temporary database.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("data").join("store.db")
}

fn run(db: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_sellerdesk");
    Command::new(cli_bin)
        .env_remove("SELLERDESK_LOG_PROFILE")
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn run_ok(db: &Path, args: &[&str]) -> String {
    let output = run(db, args);
    assert!(
        output.status.success(),
        "CLI command {:?} should succeed. Stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn add_bob(db: &Path) {
    run_ok(
        db,
        &[
            "seller",
            "add",
            "--name",
            "Bob",
            "--email",
            "bob@x.com",
            "--birth-date",
            "1998-05-01",
            "--base-salary",
            "2000.00",
            "--department",
            "1",
        ],
    );
}

#[test]
fn test_cli_creates_database_and_lists_departments() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let stdout = run_ok(&db, &["department", "add", "Computers"]);
    assert!(stdout.contains("Department created: 1 Computers"), "{}", stdout);
    assert!(db.exists(), "database file should be created");

    run_ok(&db, &["department", "add", "Books"]);
    let listing = run_ok(&db, &["department", "list"]);
    let books = listing.find("Books").unwrap();
    let computers = listing.find("Computers").unwrap();
    assert!(books < computers, "departments should be listed by name");
}

#[test]
fn test_cli_seller_add_and_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    run_ok(&db, &["department", "add", "Computers"]);
    add_bob(&db);

    let stdout = run_ok(&db, &["seller", "show", "1", "--json"]);
    let seller: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(seller["id"], 1);
    assert_eq!(seller["name"], "Bob");
    assert_eq!(seller["birth_date"], "1998-05-01");
    assert_eq!(seller["base_salary"], "2000.00");
    assert_eq!(seller["department"]["name"], "Computers");
}

#[test]
fn test_cli_seller_list_by_department() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    run_ok(&db, &["department", "add", "Computers"]);
    run_ok(&db, &["department", "add", "Books"]);
    add_bob(&db);
    run_ok(
        &db,
        &[
            "seller",
            "add",
            "--name",
            "Anna",
            "--email",
            "anna@x.com",
            "--birth-date",
            "1990-02-11",
            "--base-salary",
            "3100",
            "--department",
            "2",
        ],
    );

    let stdout = run_ok(&db, &["seller", "list", "--department", "1", "--json"]);
    let sellers: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sellers.len(), 1);
    assert_eq!(sellers[0]["name"], "Bob");

    let all = run_ok(&db, &["seller", "list"]);
    assert!(all.find("Anna").unwrap() < all.find("Bob").unwrap());
}

#[test]
fn test_cli_seller_update_and_delete() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    run_ok(&db, &["department", "add", "Computers"]);
    add_bob(&db);

    run_ok(&db, &["seller", "update", "1", "--base-salary", "2500.50"]);
    let stdout = run_ok(&db, &["seller", "show", "1", "--json"]);
    let seller: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(seller["base_salary"], "2500.50");
    assert_eq!(seller["email"], "bob@x.com");

    run_ok(&db, &["seller", "delete", "1"]);
    let output = run(&db, &["seller", "show", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: seller 1 not found"));
}

#[test]
fn test_cli_seller_add_unknown_department_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = run(
        &db,
        &[
            "seller",
            "add",
            "--name",
            "Bob",
            "--email",
            "bob@x.com",
            "--birth-date",
            "1998-05-01",
            "--base-salary",
            "2000.00",
            "--department",
            "9",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("department 9 not found"));
}

#[test]
fn test_cli_delete_referenced_department_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    run_ok(&db, &["department", "add", "Computers"]);
    add_bob(&db);

    let output = run(&db, &["department", "delete", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("FOREIGN KEY"));
}
