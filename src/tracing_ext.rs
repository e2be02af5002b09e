//! Tracing integration for error-detail.
//!
//! Emits detailed errors as structured `tracing` events, with the file, line
//! and function as separate fields instead of one opaque string.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-detail = { version = "0.1", features = ["tracing"] }
//! ```

use std::fmt::Display;

use tracing::Level;

use crate::codec::parse;
use crate::types::Detail;

/// Emits `detail` as an `ERROR` event.
///
/// The stack is attached only when `DEBUG` is enabled for this target.
pub fn record(detail: &Detail) {
    if tracing::enabled!(Level::DEBUG) {
        tracing::error!(
            file = %detail.file(),
            line = detail.line(),
            func = %detail.func(),
            stack = %detail.stack(),
            "{}",
            detail.message()
        );
    } else {
        tracing::error!(
            file = %detail.file(),
            line = detail.line(),
            func = %detail.func(),
            "{}",
            detail.message()
        );
    }
}

/// Extension trait for logging the error side of a `Result`.
pub trait ResultTraceExt {
    /// Logs the error, if any, and returns `self` unchanged.
    ///
    /// Detailed errors are logged through [`record`]; plain errors are logged
    /// with their text only, since they carry no location.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_detail::tracing_ext::ResultTraceExt;
    ///
    /// let port = read_port().trace_detail()?;
    /// ```
    fn trace_detail(self) -> Self;
}

impl<T, E: Display> ResultTraceExt for Result<T, E> {
    fn trace_detail(self) -> Self {
        if let Err(err) = &self {
            let text = err.to_string();
            match parse(&text) {
                Some(detail) => record(&detail),
                None => tracing::error!(error = %text, "plain error"),
            }
        }
        self
    }
}
