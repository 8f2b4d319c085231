//! Database connection management
//!
//! The connection provider side of the store: opening and configuring the one
//! live connection the caller owns. Repositories only ever borrow it.

use crate::errors::{persistence, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Database file; `None` opens a private in-memory database
    pub path: Option<PathBuf>,
    /// Enforce `seller.DepartmentId -> department.Id` (SQLite defaults to off)
    pub foreign_keys: bool,
    /// Use write-ahead logging (file databases only)
    pub wal: bool,
    /// How long a statement waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl DbConfig {
    /// Settings for a file-backed database
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::in_memory()
        }
    }

    /// Settings for an in-memory database (for testing)
    pub fn in_memory() -> Self {
        Self {
            path: None,
            foreign_keys: true,
            wal: true,
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Sets whether write-ahead logging is enabled
    pub fn wal(mut self, enabled: bool) -> Self {
        self.wal = enabled;
        self
    }

    /// Sets the busy timeout
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Open a SQLite database at the given path with default settings
pub fn open(path: impl Into<PathBuf>) -> Result<Connection> {
    open_with(&DbConfig::new(path))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    open_with(&DbConfig::in_memory())
}

/// Open and configure a connection according to `config`
pub fn open_with(config: &DbConfig) -> Result<Connection> {
    let conn = match &config.path {
        Some(path) => {
            debug!(path = %path.display(), "Opening database");
            Connection::open(path)
        }
        None => Connection::open_in_memory(),
    }
    .map_err(|e| persistence("open", e))?;

    configure(&conn, config)?;
    Ok(conn)
}

/// Apply connection-level settings
pub fn configure(conn: &Connection, config: &DbConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", config.foreign_keys)
        .map_err(|e| persistence("configure", e))?;

    conn.busy_timeout(config.busy_timeout)
        .map_err(|e| persistence("configure", e))?;

    // In-memory databases report "memory" and cannot switch to WAL
    if config.wal && config.path.is_some() {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(|e| persistence("configure", e))?;
        debug!(journal_mode = %mode, "Journal mode set");
    }

    Ok(())
}
