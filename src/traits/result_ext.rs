//! Extension trait for turning `Result` errors into [`Detail`]s.
//!
//! # Examples
//!
//! ```
//! use error_detail::traits::ResultExt;
//!
//! fn load_config() -> error_detail::DetailResult<String> {
//!     std::fs::read_to_string("missing-config.toml").detailed()
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.message().contains("os error"));
//! assert!(err.line() >= 1);
//! ```

use std::fmt::Display;
use std::panic::Location;

use crate::codec::details_from_text;
use crate::types::DetailResult;

/// Converts the error side of a `Result` into a [`Detail`](crate::Detail).
pub trait ResultExt<T> {
    /// Keeps the context embedded in a detailed error; a plain error is
    /// attributed to the caller of `detailed` with a fresh stack snapshot.
    fn detailed(self) -> DetailResult<T>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    #[track_caller]
    #[inline(never)]
    fn detailed(self) -> DetailResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(details_from_text(&err.to_string(), 2, Location::caller())),
        }
    }
}

impl<T> ResultExt<T> for Option<T> {
    /// `None` becomes a detail with the message `"<nil>"`.
    #[track_caller]
    #[inline(never)]
    fn detailed(self) -> DetailResult<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(details_from_text("<nil>", 2, Location::caller())),
        }
    }
}
