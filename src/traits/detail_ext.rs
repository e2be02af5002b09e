//! Method-call access to the codec for any error type.
//!
//! # Examples
//!
//! ```
//! use error_detail::traits::DetailExt;
//! use error_detail::detail;
//! use std::io;
//!
//! let err = detail!("disk full");
//! assert!(err.is_detailed());
//! assert_eq!(err.detail_message(), "disk full");
//!
//! let plain = io::Error::new(io::ErrorKind::Other, "disk\nfull");
//! assert!(!plain.is_detailed());
//! assert_eq!(plain.details().message(), "disk full");
//! ```

use std::error::Error;
use std::panic::Location;

use crate::codec::{details_from_text, matches, message_of};
use crate::types::Detail;

/// Detail-aware queries available on every error.
pub trait DetailExt {
    /// Whether the error's text matches the detail grammar.
    fn is_detailed(&self) -> bool;

    /// Structured fields of the error; plain errors are attributed to the
    /// caller of this method, like [`details`](crate::details).
    fn details(&self) -> Detail;

    /// The message [`details`](DetailExt::details) would report, without
    /// capturing a stack for plain errors.
    fn detail_message(&self) -> String;
}

impl<E: Error + ?Sized> DetailExt for E {
    #[inline]
    fn is_detailed(&self) -> bool {
        matches(&self.to_string())
    }

    #[track_caller]
    #[inline(never)]
    fn details(&self) -> Detail {
        details_from_text(&self.to_string(), 2, Location::caller())
    }

    #[inline]
    fn detail_message(&self) -> String {
        message_of(&self.to_string())
    }
}
