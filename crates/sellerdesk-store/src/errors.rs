//! Error handling for sellerdesk-store
//!
//! Wraps the core `DaoError` with rusqlite-specific constructors. Every
//! driver error crosses the crate boundary through one of these helpers, so
//! callers never see `rusqlite::Error` directly.

use sellerdesk_core::errors::DaoError;

/// Result type alias using DaoError
pub type Result<T> = std::result::Result<T, DaoError>;

/// Create a persistence error from rusqlite::Error
pub fn persistence(op: &str, err: rusqlite::Error) -> DaoError {
    DaoError::persistence(op, err.to_string())
}

/// Classify an error raised while reading a column
///
/// Shape problems (unknown column, wrong type, unconvertible value) are
/// mapping errors; anything else the cursor reports is a store failure.
pub fn column_error(column: &str, err: rusqlite::Error) -> DaoError {
    match err {
        rusqlite::Error::InvalidColumnName(_)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::InvalidColumnIndex(_)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => {
            DaoError::mapping(column, err.to_string())
        }
        other => DaoError::persistence("read_column", other.to_string()),
    }
}

/// The store accepted the statement but changed nothing
pub fn no_rows_affected(op: &str) -> DaoError {
    DaoError::persistence(op, "no rows affected")
}

/// A required identifier is missing from the argument
pub fn missing_id(op: &str, what: &str) -> DaoError {
    DaoError::invalid_input(op, format!("{} id is not set", what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellerdesk_core::errors::ErrorKind;

    #[test]
    fn test_unknown_column_is_mapping_error() {
        let err = column_error(
            "DepName",
            rusqlite::Error::InvalidColumnName("DepName".to_string()),
        );
        assert_eq!(err.kind(), ErrorKind::Mapping);
        assert!(err.to_string().contains("DepName"));
    }

    #[test]
    fn test_other_read_failure_is_persistence_error() {
        let err = column_error("Name", rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ErrorKind::Persistence);
    }

    #[test]
    fn test_no_rows_affected_message() {
        let err = no_rows_affected("seller_insert");
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(err.message(), "no rows affected");
    }

    #[test]
    fn test_missing_id_is_invalid_input() {
        let err = missing_id("seller_update", "seller");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.message(), "seller id is not set");
    }
}
