use thiserror::Error;

/// Result type alias using DaoError
pub type Result<T> = std::result::Result<T, DaoError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used by the logging facility and by
/// callers that want to branch on the failure class without matching on
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed in a value that violates an operation precondition
    InvalidInput,
    /// Any failure reported by the backing store
    Persistence,
    /// A result row did not have the shape the mapper expects
    Mapping,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
            ErrorKind::Mapping => "ERR_MAPPING",
        }
    }
}

/// Errors raised by data-access operations
///
/// "Not found" is deliberately absent: point lookups return `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DaoError {
    /// The store rejected or failed an operation (connectivity, SQL error,
    /// constraint violation), or an insert affected zero rows.
    #[error("Persistence failure in '{op}': {message}")]
    Persistence { op: String, message: String },

    /// A required column is missing from the row, or holds a value the
    /// mapper cannot convert. Indicates a query/mapper contract violation.
    #[error("Cannot map column '{column}': {message}")]
    Mapping { column: String, message: String },

    /// An operation precondition on its argument does not hold
    #[error("Invalid input for '{op}': {message}")]
    InvalidInput { op: String, message: String },
}

impl DaoError {
    /// Create a persistence error for the given operation
    pub fn persistence(op: impl Into<String>, message: impl Into<String>) -> Self {
        DaoError::Persistence {
            op: op.into(),
            message: message.into(),
        }
    }

    /// Create a mapping error for the given column
    pub fn mapping(column: impl Into<String>, message: impl Into<String>) -> Self {
        DaoError::Mapping {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-input error for the given operation
    pub fn invalid_input(op: impl Into<String>, message: impl Into<String>) -> Self {
        DaoError::InvalidInput {
            op: op.into(),
            message: message.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            DaoError::Persistence { .. } => ErrorKind::Persistence,
            DaoError::Mapping { .. } => ErrorKind::Mapping,
            DaoError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Get the underlying human-readable message
    pub fn message(&self) -> &str {
        match self {
            DaoError::Persistence { message, .. }
            | DaoError::Mapping { message, .. }
            | DaoError::InvalidInput { message, .. } => message,
        }
    }
}

// ========== End Error Facility ==========
