//! Extension traits.
//!
//! - [`DetailExt`]: detail-aware queries on any `std::error::Error`
//! - [`ResultExt`]: converts the error side of a `Result` (or a `None`) into a
//!   [`Detail`](crate::Detail)
//!
//! # Examples
//!
//! ```
//! use error_detail::traits::{DetailExt, ResultExt};
//!
//! let parsed: Result<u32, _> = "forty-two".parse::<u32>();
//! let err = parsed.detailed().unwrap_err();
//!
//! assert_eq!(err.message(), "invalid digit found in string");
//! assert!(err.is_detailed());
//! ```

pub mod detail_ext;
pub mod result_ext;

pub use detail_ext::DetailExt;
pub use result_ext::ResultExt;
