use std::fmt;
use std::panic::Location;

use super::Detail;
use crate::render::{build_message, build_message_fmt, Render};
use crate::types::caller::Capture;

impl Detail {
    /// Creates a detail attributed to the caller.
    ///
    /// Each argument is rendered through [`Render`] and the results are joined
    /// with single spaces. Prefer the [`detail!`](crate::detail) macro.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_detail::Detail;
    ///
    /// let err = Detail::new(&[&"file not found", &"in", &"/tmp"]);
    /// assert_eq!(err.message(), "file not found in /tmp");
    /// ```
    #[track_caller]
    #[inline(never)]
    pub fn new(args: &[&dyn Render]) -> Self {
        let message = build_message(args);
        Self::assemble(Capture::take(1, Location::caller()), message)
    }

    /// Creates a detail from pre-built format arguments.
    ///
    /// Prefer the [`detailf!`](crate::detailf) macro, which wraps every
    /// positional argument so nested details contribute only their message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_detail::Detail;
    ///
    /// let err = Detail::newf(format_args!("{} not found in {}", "file", "/tmp"));
    /// assert_eq!(err.message(), "file not found in /tmp");
    /// ```
    #[track_caller]
    #[inline(never)]
    pub fn newf(args: fmt::Arguments<'_>) -> Self {
        let message = build_message_fmt(args);
        Self::assemble(Capture::take(1, Location::caller()), message)
    }

    /// Like [`new`](Detail::new), but attributes the error `skip_caller` frames
    /// up: `1` is the immediate caller, `2` the caller's caller, and so on.
    ///
    /// Lets helper functions report the location of whoever called them.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_detail::Detail;
    ///
    /// fn require(ok: bool) -> Result<(), Detail> {
    ///     if ok { Ok(()) } else { Err(Detail::new_skip_caller(2, &[&"requirement failed"])) }
    /// }
    ///
    /// let err = require(false).unwrap_err();
    /// assert_eq!(err.message(), "requirement failed");
    /// ```
    #[track_caller]
    #[inline(never)]
    pub fn new_skip_caller(skip_caller: usize, args: &[&dyn Render]) -> Self {
        let message = build_message(args);
        Self::assemble(Capture::take(skip_caller, Location::caller()), message)
    }

    /// Format-argument counterpart of [`new_skip_caller`](Detail::new_skip_caller).
    #[track_caller]
    #[inline(never)]
    pub fn new_skip_callerf(skip_caller: usize, args: fmt::Arguments<'_>) -> Self {
        let message = build_message_fmt(args);
        Self::assemble(Capture::take(skip_caller, Location::caller()), message)
    }
}
