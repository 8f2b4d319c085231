//! Sensitive data marker for automatic redaction
//!
//! Seller contact details (email addresses in particular) are personal data.
//! The `Sensitive<T>` wrapper keeps them out of log lines and serialized
//! diagnostics while leaving the value reachable for the code that needs it.

use serde::{Serialize, Serializer};
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug, Display and Serialize
///
/// # Example
///
/// ```
/// use sellerdesk_core_types::Sensitive;
///
/// let email = Sensitive::new("bob@example.com");
/// assert_eq!(format!("{:?}", email), "***REDACTED***");
/// assert_eq!(format!("{}", email), "***REDACTED***");
///
/// // Access the actual value when needed
/// assert_eq!(email.expose(), &"bob@example.com");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    /// Partially masked rendering of an email address: first character of the
    /// local part and the full domain survive, e.g. `b***@example.com`.
    ///
    /// Values without an `@` are fully redacted.
    pub fn masked_email(&self) -> String {
        let raw = self.0.as_ref();
        match raw.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let first = local.chars().next().map(String::from).unwrap_or_default();
                format!("{}***@{}", first, domain)
            }
            _ => REDACTED.to_string(),
        }
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
