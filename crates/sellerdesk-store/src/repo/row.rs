//! Name-addressed access to a positioned result row
//!
//! The mapper is written against `NamedRow` rather than `rusqlite::Row`, so
//! it can be driven by any SQL driver's row type (or a fixture in tests).

use crate::errors::{column_error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rusqlite::types::ValueRef;
use sellerdesk_core::errors::DaoError;
use std::str::FromStr;

/// A result row whose columns can be read by name
pub trait NamedRow {
    /// Read an integer column
    fn integer(&self, column: &str) -> Result<i64>;

    /// Read a text column
    fn text(&self, column: &str) -> Result<String>;

    /// Read a calendar date column
    fn date(&self, column: &str) -> Result<NaiveDate>;

    /// Read an exact decimal column
    fn decimal(&self, column: &str) -> Result<Decimal>;
}

impl NamedRow for rusqlite::Row<'_> {
    fn integer(&self, column: &str) -> Result<i64> {
        self.get::<_, i64>(column)
            .map_err(|e| column_error(column, e))
    }

    fn text(&self, column: &str) -> Result<String> {
        self.get::<_, String>(column)
            .map_err(|e| column_error(column, e))
    }

    fn date(&self, column: &str) -> Result<NaiveDate> {
        self.get::<_, NaiveDate>(column)
            .map_err(|e| column_error(column, e))
    }

    fn decimal(&self, column: &str) -> Result<Decimal> {
        let value = self.get_ref(column).map_err(|e| column_error(column, e))?;
        match value {
            ValueRef::Text(bytes) => {
                let raw = std::str::from_utf8(bytes)
                    .map_err(|e| DaoError::mapping(column, e.to_string()))?;
                Decimal::from_str(raw.trim()).map_err(|e| DaoError::mapping(column, e.to_string()))
            }
            ValueRef::Integer(i) => Ok(Decimal::from(i)),
            // Rows written by other tools may carry REAL salaries
            ValueRef::Real(f) => {
                Decimal::try_from(f).map_err(|e| DaoError::mapping(column, e.to_string()))
            }
            ValueRef::Null => Err(DaoError::mapping(column, "unexpected NULL")),
            ValueRef::Blob(_) => Err(DaoError::mapping(column, "unexpected BLOB")),
        }
    }
}
