//! Wire form of a [`Detail`] and its parser.
//!
//! A detailed error serializes to
//!
//! ```text
//! [CAUSE]: (<file>:<line>) <func>: <message> [STACK]: <stack>
//! ```
//!
//! and any error whose text matches that grammar is treated as detailed, no
//! matter which type produced it. The structured fields travel only inside the
//! string. A plain message that happens to match the grammar is therefore read
//! back as a detailed one.
//!
//! # Examples
//!
//! ```
//! use error_detail::{details, detail, is_detailed};
//! use std::error::Error;
//!
//! let err: Box<dyn Error> = Box::new(detail!("disk full"));
//! assert!(is_detailed(Some(err.as_ref())));
//!
//! let parsed = details(Some(err.as_ref())).unwrap();
//! assert_eq!(parsed.message(), "disk full");
//! ```

use std::borrow::Cow;
use std::error::Error;
use std::panic::Location;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::render::build_message;
use crate::types::caller::Capture;
use crate::types::Detail;

/// Marker that opens the cause segment of the wire form.
pub const CAUSE_MARKER: &str = "[CAUSE]";
/// Marker that opens the stack segment of the wire form.
pub const STACK_MARKER: &str = "[STACK]";

/// Groups: file, line, function, message, stack.
static DETAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[CAUSE\]: \(([^:]+):([0-9]+)\) ([^:]+): (.+?) \[STACK\]:\s*([\s\S]+)")
        .expect("detail grammar is a valid regex")
});

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("line break pattern is a valid regex"));

/// Strips the wire markers and flattens line breaks to single spaces.
///
/// Removal repeats until nothing changes, so `[[STACK]STACK]` cannot leave a
/// marker behind.
pub(crate) fn clean_message(msg: &str) -> String {
    let mut stripped = msg.to_owned();
    loop {
        let next = stripped.replace(STACK_MARKER, "").replace(CAUSE_MARKER, "");
        if next == stripped {
            break;
        }
        stripped = next;
    }
    LINE_BREAK.replace_all(&stripped, " ").into_owned()
}

/// Whether `text` matches the detail grammar anywhere.
pub(crate) fn matches(text: &str) -> bool {
    DETAIL_PATTERN.is_match(text)
}

/// Parses the wire form out of `text`; `None` for plain text.
pub(crate) fn parse(text: &str) -> Option<Detail> {
    let caps = DETAIL_PATTERN.captures(text)?;
    Some(Detail {
        file: caps[1].to_owned(),
        line: caps[2].to_owned(),
        func: caps[3].to_owned(),
        message: caps[4].to_owned(),
        stack: caps[5].to_owned(),
    })
}

/// The message of a detailed error, or the text unchanged for a plain one.
pub(crate) fn normalize(text: &str) -> Cow<'_, str> {
    match DETAIL_PATTERN.captures(text) {
        Some(caps) => Cow::Owned(caps[4].to_owned()),
        None => Cow::Borrowed(text),
    }
}

/// The message [`details`] would report for `text`, without capturing a stack.
pub(crate) fn message_of(text: &str) -> String {
    match parse(text) {
        Some(detail) => detail.message,
        None => build_message(&[&text]),
    }
}

/// Reports whether the text of `err` matches the detail grammar.
///
/// Returns `false` for `None`.
///
/// # Examples
///
/// ```
/// use error_detail::{detail, is_detailed};
/// use std::io;
///
/// let plain = io::Error::new(io::ErrorKind::Other, "boom");
/// assert!(!is_detailed(Some(&plain)));
/// assert!(is_detailed(Some(&detail!("boom"))));
/// assert!(!is_detailed(None));
/// ```
pub fn is_detailed(err: Option<&dyn Error>) -> bool {
    err.is_some_and(|err| matches(&err.to_string()))
}

/// Recovers the structured fields of `err`.
///
/// Detailed errors keep the location and stack embedded in their text. A plain
/// error has none, so it is attributed to the caller of `details` with a fresh
/// stack snapshot, and its text becomes the cleaned message.
///
/// # Examples
///
/// ```
/// use error_detail::details;
/// use std::io;
///
/// let plain = io::Error::new(io::ErrorKind::Other, "boom");
/// let detail = details(Some(&plain)).unwrap();
/// assert_eq!(detail.message(), "boom");
/// assert!(details(None).is_none());
/// ```
#[track_caller]
#[inline(never)]
pub fn details(err: Option<&dyn Error>) -> Option<Detail> {
    let err = err?;
    Some(details_from_text(&err.to_string(), 2, Location::caller()))
}

/// Shared body of every `details` entry point.
///
/// `skip` counts from this function, so `2` names the caller of the public
/// function that called it.
#[inline(never)]
pub(crate) fn details_from_text(text: &str, skip: usize, hint: &Location<'_>) -> Detail {
    if let Some(detail) = parse(text) {
        return detail;
    }

    let capture = Capture::take(skip, hint);
    Detail::assemble(capture, build_message(&[&text]))
}
