//! Global CLI settings
//!
//! Every setting can come from a flag or from the environment.

use clap::Args;
use rusqlite::Connection;
use sellerdesk_core::logging_facility::{self, Profile};
use sellerdesk_store::bootstrap_schema;
use sellerdesk_store::db::{open_with, DbConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Config {
    /// SQLite database file
    #[arg(
        long,
        global = true,
        env = "SELLERDESK_DB",
        default_value = ".sellerdesk/store.db"
    )]
    pub db: PathBuf,

    /// Log profile (development or production); logging is off when unset
    #[arg(long, global = true, env = "SELLERDESK_LOG_PROFILE")]
    pub log_profile: Option<Profile>,
}

impl Config {
    pub fn init_logging(&self) {
        if let Some(profile) = self.log_profile {
            logging_facility::init(profile);
        }
    }

    /// Open the database, creating its directory and schema on first use
    pub fn open_store(&self) -> Result<Connection, Box<dyn std::error::Error>> {
        if let Some(parent) = self.db.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = open_with(&DbConfig::new(&self.db))?;
        bootstrap_schema(&conn)?;
        Ok(conn)
    }
}
