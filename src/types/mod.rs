//! Error types.
//!
//! [`Detail`] is the structured record every constructor produces;
//! [`PlainError`] is the message-only error returned by
//! [`join_to_err`](crate::join_to_err).
//!
//! # Examples
//!
//! ```
//! use error_detail::{detail, Detail};
//!
//! let err: Detail = detail!("database connection failed", "after", 3, "retries");
//! assert_eq!(err.message(), "database connection failed after 3 retries");
//! assert!(err.to_string().starts_with("[CAUSE]: ("));
//! ```

pub(crate) mod caller;
pub mod detail;
pub mod plain_error;

pub use detail::Detail;
pub use plain_error::PlainError;

/// Result alias whose failures are [`Detail`]s.
pub type DetailResult<T> = Result<T, Detail>;
