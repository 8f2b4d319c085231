//! Bootstrap schema
//!
//! The two tables the repositories read and write, embedded at compile time.
//! `bootstrap_schema` is idempotent and leaves existing rows untouched.

use crate::errors::{persistence, Result};
use rusqlite::Connection;
use tracing::debug;

const INITIAL_SCHEMA: &str = include_str!("../sql/001_initial_schema.sql");

/// Create the `department` and `seller` tables and their indexes if missing
pub fn bootstrap_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(INITIAL_SCHEMA)
        .map_err(|e| persistence("bootstrap_schema", e))?;

    debug!("Schema ready");
    Ok(())
}
