//! Constructor macros for [`Detail`](crate::types::Detail).
//!
//! - [`macro@crate::detail`] - joins any number of [`Render`](crate::render::Render)
//!   values with spaces.
//! - [`macro@crate::detailf`] - `format!`-style message; nested errors contribute
//!   their message, not their serialized form.
//! - [`macro@crate::detail_skip`] / [`macro@crate::detailf_skip`] - same, attributed
//!   `skip` frames up so helper functions can blame their caller.
//!
//! # Examples
//!
//! ```
//! use error_detail::{detail, detailf};
//!
//! let inner = detail!("disk full");
//! let outer = detailf!("saving {} failed: {}", "report.pdf", inner);
//!
//! assert_eq!(outer.message(), "saving report.pdf failed: disk full");
//! ```

/// Creates a [`Detail`](crate::types::Detail) whose message is the rendered
/// arguments joined by single spaces.
///
/// # Examples
///
/// ```rust
/// use error_detail::detail;
///
/// let err = detail!("file not found", 404, true);
/// assert_eq!(err.message(), "file not found 404 true");
/// ```
#[macro_export]
macro_rules! detail {
    ($($arg:expr),* $(,)?) => {
        $crate::types::Detail::new(&[$(&$arg as &dyn $crate::render::Render),*])
    };
}

/// Creates a [`Detail`](crate::types::Detail) from a format string.
///
/// Positional arguments go through [`Render`](crate::render::Render), so they
/// must implement it; numeric arguments keep their width and precision.
///
/// Only `{}` placeholders are supported. There is no `{:?}` form; wrap the
/// value in [`Dbg`](crate::render::Dbg) to render its `Debug` output instead.
///
/// Identifiers captured inline (`"{inner}"`) bypass `Render` and use plain
/// `Display`. A nested error captured that way contributes its whole wire
/// form, stack included, so pass errors positionally.
///
/// # Examples
///
/// ```rust
/// use error_detail::detailf;
///
/// let err = detailf!("{} not found in {}", "file", "/tmp");
/// assert_eq!(err.message(), "file not found in /tmp");
///
/// let err = detailf!("took {:.1}s", 2.345_f64);
/// assert_eq!(err.message(), "took 2.3s");
///
/// let err = detailf!("unexpected state {}", error_detail::render::Dbg(Some(3)));
/// assert_eq!(err.message(), "unexpected state Some(3)");
/// ```
#[macro_export]
macro_rules! detailf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::types::Detail::newf(format_args!($fmt $(, $crate::render::Arg(&$arg))*))
    };
}

/// [`detail!`](crate::detail) attributed `skip` frames up: `1` names the
/// function containing the macro call, as `detail!` does, `2` its caller.
///
/// # Examples
///
/// ```rust
/// use error_detail::{detail_skip, Detail};
///
/// fn check_port(port: u32) -> Result<u32, Detail> {
///     if port > 65535 {
///         return Err(detail_skip!(2; "port out of range:", port));
///     }
///     Ok(port)
/// }
///
/// let err = check_port(70000).unwrap_err();
/// assert_eq!(err.message(), "port out of range: 70000");
/// ```
#[macro_export]
macro_rules! detail_skip {
    ($skip:expr; $($arg:expr),* $(,)?) => {
        $crate::types::Detail::new_skip_caller($skip, &[$(&$arg as &dyn $crate::render::Render),*])
    };
}

/// [`detailf!`](crate::detailf) attributed `skip` frames up.
#[macro_export]
macro_rules! detailf_skip {
    ($skip:expr; $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::types::Detail::new_skip_callerf($skip, format_args!($fmt $(, $crate::render::Arg(&$arg))*))
    };
}
