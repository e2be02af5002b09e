//! The structured error record.
//!
//! A [`Detail`] captures where an error was raised (file, line, function), a
//! cleaned human-readable message, and a stack snapshot. Its `Display` output
//! is the wire form understood by [`details`](crate::details), which is the only
//! channel the structured fields travel through once the value is handed on as
//! a generic error.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::clean_message;
use crate::types::caller::{site_field, stack_text, Capture};

mod constructors;
mod traits;

/// Error record carrying source location, message and stack text.
///
/// The message never contains the wire markers (`[CAUSE]`, `[STACK]`) or raw
/// line breaks, so the serialized form always parses back unambiguously.
///
/// # Examples
///
/// ```
/// use error_detail::Detail;
///
/// let detail = Detail::from_parts("src/a.rs", 10, "load", "disk full", "stack");
/// assert_eq!(detail.cause(), "(src/a.rs:10) load: disk full");
/// assert_eq!(detail.to_string(), "[CAUSE]: (src/a.rs:10) load: disk full [STACK]: stack");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Detail {
    pub(crate) file: String,
    pub(crate) line: String,
    pub(crate) func: String,
    pub(crate) message: String,
    pub(crate) stack: String,
}

impl Detail {
    /// Builds a detail from explicit parts.
    ///
    /// Every field goes through the same rules as a captured call site: the
    /// message is cleaned, colons are removed from `file` and `func`, `line` is
    /// at least 1 and an empty stack becomes `<unavailable>`. The result
    /// reads back through [`details`](crate::details) unchanged whenever the
    /// message is not empty.
    pub fn from_parts(
        file: impl Into<String>,
        line: u32,
        func: impl Into<String>,
        message: impl AsRef<str>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            file: site_field(&file.into()),
            line: line.max(1).to_string(),
            func: site_field(&func.into()),
            message: clean_message(message.as_ref()),
            stack: stack_text(&stack.into()),
        }
    }

    pub(crate) fn assemble(capture: Capture, message: String) -> Self {
        let Capture { site, stack } = capture;
        let detail = Self { file: site.file, line: site.line, func: site.func, message, stack };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            file = %detail.file,
            line = %detail.line,
            func = %detail.func,
            message = %detail.message,
            "detail created"
        );

        detail
    }

    /// `(file:line) func: message`, the wire form without its stack segment.
    #[must_use]
    pub fn cause(&self) -> String {
        format!("({}:{}) {}: {}", self.file, self.line, self.func, self.message)
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parent directory and file name of the source file, e.g. `src/lib.rs`.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number, or `0` when the stored line is not a number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line.parse().unwrap_or(0)
    }

    /// Last path segment of the function the error is attributed to.
    #[inline]
    pub fn func(&self) -> &str {
        &self.func
    }

    #[inline]
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Writes [`cause`](Detail::cause) to standard output.
    pub fn print_cause(&self) {
        print!("{}", self.cause());
    }

    /// Writes the stack snapshot to standard output.
    pub fn print_stack_trace(&self) {
        print!("{}", self.stack);
    }
}
