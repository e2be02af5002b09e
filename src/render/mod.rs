//! Best-effort text rendering of arbitrary values for error messages.
//!
//! [`Render`] is implemented per semantic category:
//!
//! | Category | Rendering |
//! |----------|-----------|
//! | text (`str`, `String`, `Cow<str>`, `char`) | unchanged |
//! | integers / floats | base 10 / shortest round-trip decimal |
//! | `bool` | `true` / `false` |
//! | bytes (`[u8]`, `[u8; N]`, `Vec<u8>`) | raw text (lossy UTF-8) |
//! | structured (`serde_json::Value`, maps, [`Json`]) | JSON, empty on failure |
//! | errors ([`Detail`], `dyn Error`, `io::Error`, [`PlainError`]) | message if detailed, else plain text |
//! | `Option<T>` | inner value, `None` falls back to `"<nil>"` |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | inner value |
//!
//! Anything else can be passed through [`Dbg`], which uses its `Debug` form.
//!
//! # Examples
//!
//! ```
//! use error_detail::render::{render, Json};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("id", 7);
//!
//! assert_eq!(render(&42u8), "42");
//! assert_eq!(render(&Json(vec![1, 2])), "[1,2]");
//! assert_eq!(render(&map), r#"{"id":7}"#);
//! assert_eq!(render(&None::<i32>), "<nil>");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;

use crate::codec::{clean_message, normalize};
use crate::types::{Detail, PlainError};

/// Why a value could not be rendered directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// An optional value holding nothing.
    #[error("cannot render value: it is null")]
    Null,
    /// A value kind without a text form.
    #[error("cannot render value: unsupported kind `{0}`")]
    Unsupported(&'static str),
}

/// Converts a value into the text used inside error messages.
pub trait Render {
    /// Renders the value, reporting kinds that have no direct text form.
    fn try_render(&self) -> Result<String, RenderError>;

    /// Text used when [`try_render`](Render::try_render) fails.
    fn render_fallback(&self) -> String {
        String::from("<nil>")
    }

    /// Writes the value as a `detailf!` argument, honouring width and precision.
    fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&render(self))
    }
}

/// Renders `value`, falling back to its default form on failure. Never fails.
pub fn render<R: Render + ?Sized>(value: &R) -> String {
    match value.try_render() {
        Ok(text) => text,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %_err, "falling back to default rendering");
            value.render_fallback()
        },
    }
}

/// Joins rendered arguments with single spaces and cleans the result.
///
/// Trailing newlines are trimmed before the remaining ones are flattened.
pub(crate) fn build_message(args: &[&dyn Render]) -> String {
    let parts: SmallVec<[String; 4]> = args.iter().map(|arg| render(*arg)).collect();
    let joined = parts.join(" ");
    clean_message(joined.trim_end_matches('\n'))
}

/// Formats arguments already wrapped in [`Arg`] and cleans the result.
pub(crate) fn build_message_fmt(args: fmt::Arguments<'_>) -> String {
    clean_message(&fmt::format(args))
}

/// Format argument adapter used by `detailf!`.
///
/// Its `Display` delegates to [`Render::fmt_arg`], so nested errors contribute
/// their message instead of their full serialized form.
pub struct Arg<'a>(pub &'a dyn Render);

impl Display for Arg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt_arg(f)
    }
}

/// Renders the wrapped value as JSON.
///
/// # Examples
///
/// ```
/// use error_detail::render::{render, Json};
///
/// assert_eq!(render(&Json(("a", 1))), r#"["a",1]"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: Serialize> Render for Json<T> {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(to_json(&self.0))
    }
}

/// Renders the wrapped value with its `Debug` form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Dbg<T>(pub T);

impl<T: Debug> Render for Dbg<T> {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(format!("{:?}", self.0))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %_err, "json rendering failed");
            String::new()
        },
    }
}

macro_rules! impl_render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                #[inline]
                fn try_render(&self) -> Result<String, RenderError> {
                    Ok(self.to_string())
                }

                #[inline]
                fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_render_display!(
    str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl Render for Cow<'_, str> {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(self.to_string())
    }
}

impl Render for [u8] {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(String::from_utf8_lossy(self).into_owned())
    }
}

impl<const N: usize> Render for [u8; N] {
    fn try_render(&self) -> Result<String, RenderError> {
        self.as_slice().try_render()
    }
}

impl Render for Vec<u8> {
    fn try_render(&self) -> Result<String, RenderError> {
        self.as_slice().try_render()
    }
}

impl Render for serde_json::Value {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(self.to_string())
    }
}

impl<K: Serialize, V: Serialize, S: BuildHasher> Render for HashMap<K, V, S> {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(to_json(self))
    }
}

impl<K: Serialize, V: Serialize> Render for BTreeMap<K, V> {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(to_json(self))
    }
}

impl<T: Render> Render for Option<T> {
    fn try_render(&self) -> Result<String, RenderError> {
        match self {
            Some(value) => value.try_render(),
            None => Err(RenderError::Null),
        }
    }

    fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_arg(f),
            None => f.pad(&self.render_fallback()),
        }
    }
}

macro_rules! impl_render_indirect {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Render + ?Sized> Render for $ptr<T> {
                #[inline]
                fn try_render(&self) -> Result<String, RenderError> {
                    (**self).try_render()
                }

                #[inline]
                fn render_fallback(&self) -> String {
                    (**self).render_fallback()
                }

                #[inline]
                fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    (**self).fmt_arg(f)
                }
            }
        )*
    };
}

impl_render_indirect!(Box, Rc, Arc);

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn try_render(&self) -> Result<String, RenderError> {
        (**self).try_render()
    }

    #[inline]
    fn render_fallback(&self) -> String {
        (**self).render_fallback()
    }

    #[inline]
    fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_arg(f)
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    #[inline]
    fn try_render(&self) -> Result<String, RenderError> {
        (**self).try_render()
    }

    #[inline]
    fn render_fallback(&self) -> String {
        (**self).render_fallback()
    }

    #[inline]
    fn fmt_arg(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_arg(f)
    }
}

impl Render for Detail {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(self.message().to_owned())
    }
}

fn error_text(err: &(dyn Error + '_)) -> String {
    normalize(&err.to_string()).into_owned()
}

impl<'a> Render for dyn Error + 'a {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(error_text(self))
    }
}

impl<'a> Render for dyn Error + Send + Sync + 'a {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(error_text(self))
    }
}

impl Render for std::io::Error {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(error_text(self))
    }
}

impl Render for PlainError {
    fn try_render(&self) -> Result<String, RenderError> {
        Ok(error_text(self))
    }
}

impl Render for () {
    fn try_render(&self) -> Result<String, RenderError> {
        Err(RenderError::Unsupported("()"))
    }
}
