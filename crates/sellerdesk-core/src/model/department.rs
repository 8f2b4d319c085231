use serde::{Deserialize, Serialize};

/// Department - an organisational unit sellers belong to
///
/// Departments are plain value records. When loaded through a seller listing
/// they are handed out behind an `Arc` so every seller of the same department
/// in one result set points at one instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    /// Store-assigned identifier (None until the department is inserted)
    pub id: Option<i64>,

    /// Human-readable department name
    pub name: String,
}

impl Department {
    /// Create a department that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Create a department with a known identifier
    ///
    /// Used when reconstructing from a row, or when the caller only needs a
    /// reference to an existing department (e.g. as a seller's foreign key).
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Check if this department has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
