//! Structured logging for SellerDesk data access
//!
//! Storage backends report each DAO call as a pair of events sharing an `op`
//! name: one `start`, then either `end` or `end_error`. Binaries choose the
//! output format once through [`init`]; tests record events in memory through
//! [`init_test_capture`] instead.
//!
//! ```rust
//! use sellerdesk_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
