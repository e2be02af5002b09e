//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_detail::prelude::*;
//!
//! fn open(path: &str) -> DetailResult<String> {
//!     std::fs::read_to_string(path).detailed()
//! }
//!
//! let err = open("does-not-exist.txt").unwrap_err();
//! assert!(err.is_detailed());
//! assert!(is(Some(&err), Some(&detail!(err.message()))));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`detail!`], [`detailf!`], [`detail_skip!`], [`detailf_skip!`]
//! - **Types**: [`Detail`], [`PlainError`], [`DetailResult`]
//! - **Traits**: [`DetailExt`], [`ResultExt`], [`Render`]
//! - **Functions**: [`is_detailed`], [`details`], [`is`], [`is_not`], [`contains`],
//!   [`not_contains`], [`join`], [`join_to_err`]

// Macros
pub use crate::{detail, detail_skip, detailf, detailf_skip};

// Core types
pub use crate::types::{Detail, DetailResult, PlainError};

// Traits
pub use crate::render::Render;
pub use crate::traits::{DetailExt, ResultExt};

// Functions
pub use crate::codec::{details, is_detailed};
pub use crate::compare::{contains, is, is_not, join, join_to_err, not_contains};
