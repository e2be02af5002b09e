//! Message-level comparison and joining of errors.
//!
//! Every predicate first normalizes both sides: a detailed error is replaced by
//! its message, a plain error is kept as is. `None` on either side never
//! matches, so `is(None, None)` is `false`.
//!
//! # Examples
//!
//! ```
//! use error_detail::{contains, detail, is, join};
//! use std::io;
//!
//! let detailed = detail!("connection refused");
//! let plain = io::Error::new(io::ErrorKind::Other, "connection refused");
//!
//! assert!(is(Some(&detailed), Some(&plain)));
//! assert!(contains(Some(&detailed), Some(&io::Error::new(io::ErrorKind::Other, "refused"))));
//! assert!(!is(None, None));
//!
//! assert_eq!(join([&detailed, &detail!("retrying")], "; "), "connection refused; retrying");
//! ```

use std::error::Error;
use std::fmt::Display;

use crate::codec::{message_of, normalize};
use crate::types::PlainError;

fn normalized_pair<F>(err: Option<&dyn Error>, target: Option<&dyn Error>, cmp: F) -> bool
where
    F: FnOnce(&str, &str) -> bool,
{
    match (err, target) {
        (Some(err), Some(target)) => {
            let err = err.to_string();
            let target = target.to_string();
            cmp(&normalize(&err), &normalize(&target))
        },
        _ => false,
    }
}

/// Reports whether both errors carry the same message.
pub fn is(err: Option<&dyn Error>, target: Option<&dyn Error>) -> bool {
    normalized_pair(err, target, |err, target| err == target)
}

/// Negation of [`is`].
#[inline]
pub fn is_not(err: Option<&dyn Error>, target: Option<&dyn Error>) -> bool {
    !is(err, target)
}

/// Reports whether the message of `err` contains the message of `target`.
pub fn contains(err: Option<&dyn Error>, target: Option<&dyn Error>) -> bool {
    normalized_pair(err, target, |err, target| err.contains(target))
}

/// Negation of [`contains`].
#[inline]
pub fn not_contains(err: Option<&dyn Error>, target: Option<&dyn Error>) -> bool {
    !contains(err, target)
}

/// Joins the messages of `errs` with `sep`.
///
/// Detailed errors contribute their message, plain ones their cleaned text.
pub fn join<I>(errs: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    errs.into_iter()
        .map(|err| message_of(&err.to_string()))
        .collect::<Vec<_>>()
        .join(sep)
}

/// [`join`] wrapped in a [`PlainError`].
///
/// # Examples
///
/// ```
/// use error_detail::{detail, is_detailed, join_to_err};
///
/// let err = join_to_err([detail!("a"), detail!("b")], ", ");
/// assert_eq!(err.to_string(), "a, b");
/// assert!(!is_detailed(Some(&err)));
/// ```
pub fn join_to_err<I>(errs: I, sep: &str) -> PlainError
where
    I: IntoIterator,
    I::Item: Display,
{
    PlainError::new(join(errs, sep))
}
