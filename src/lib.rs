//! Errors that carry their own diagnostic context.
//!
//! A [`Detail`] records the file, line and function that raised it, a cleaned
//! message and a stack snapshot, and renders all of it into one string:
//!
//! ```text
//! [CAUSE]: (<file>:<line>) <func>: <message> [STACK]: <stack>
//! ```
//!
//! Any code that later receives the error, boxed as `dyn Error` or reduced to
//! its text, can recover the structured fields with [`details`], and can
//! compare errors by message with [`is`] and [`contains`] whether they are
//! detailed or plain.
//!
//! # Examples
//!
//! ## Raising and inspecting
//!
//! ```
//! use error_detail::{detail, details, is_detailed};
//! use std::error::Error;
//!
//! fn open() -> Result<(), Box<dyn Error>> {
//!     Err(Box::new(detail!("file not found")))
//! }
//!
//! let err = open().unwrap_err();
//! assert!(is_detailed(Some(err.as_ref())));
//!
//! let detail = details(Some(err.as_ref())).unwrap();
//! assert_eq!(detail.message(), "file not found");
//! assert!(detail.line() > 0);
//! ```
//!
//! ## Formatted messages
//!
//! ```
//! use error_detail::detailf;
//!
//! let err = detailf!("{} not found in {}", "file", "/tmp");
//! assert_eq!(err.message(), "file not found in /tmp");
//! ```
//!
//! ## Comparing by message
//!
//! ```
//! use error_detail::{detail, is, is_not, PlainError};
//!
//! let raised = detail!("timeout");
//! assert!(is(Some(&raised), Some(&PlainError::new("timeout"))));
//! assert!(is_not(None, Some(&raised)));
//! ```

/// Detection and parsing of the wire form
pub mod codec;
/// Message-level comparison and joining of errors
pub mod compare;
/// Constructor macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Best-effort value rendering used to build messages
pub mod render;
/// Extension traits for errors and results
pub mod traits;
/// Detail and PlainError
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use codec::{details, is_detailed};
pub use compare::{contains, is, is_not, join, join_to_err, not_contains};
pub use render::{render, Render, RenderError};
pub use traits::{DetailExt, ResultExt};
pub use types::{Detail, DetailResult, PlainError};
