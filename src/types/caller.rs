//! Call-site capture backed by a resolved stack snapshot.
//!
//! The snapshot is taken with [`backtrace::Backtrace::new`], its symbols are
//! flattened (inlined frames included) and the frame that raised the error is
//! located relative to [`Capture::take`] itself.

use backtrace::{Backtrace, BacktraceSymbol};
use std::panic::Location;
use std::path::Path;

const UNKNOWN: &str = "unknown";
const UNAVAILABLE_STACK: &str = "<unavailable>";

/// Location an error is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallSite {
    pub(crate) file: String,
    pub(crate) line: String,
    pub(crate) func: String,
}

/// A call site together with the stack text it was selected from.
#[derive(Debug, Clone)]
pub(crate) struct Capture {
    pub(crate) site: CallSite,
    pub(crate) stack: String,
}

impl Capture {
    /// Captures the stack and selects the frame `skip` levels above the function
    /// that called `take`: `0` is that function, `1` its caller, and so on.
    ///
    /// When `skip` runs past the top of the stack the function that called
    /// `take` is used instead. `hint` supplies file and line whenever the chosen
    /// frame carries no debug info.
    #[inline(never)]
    pub(crate) fn take(skip: usize, hint: &Location<'_>) -> Self {
        let backtrace = Backtrace::new();
        let symbols: Vec<&BacktraceSymbol> =
            backtrace.frames().iter().flat_map(|frame| frame.symbols()).collect();

        let site = select(&symbols, skip, hint);
        let stack = stack_text(&format!("{:?}", backtrace));

        Self { site, stack }
    }
}

fn select(symbols: &[&BacktraceSymbol], skip: usize, hint: &Location<'_>) -> CallSite {
    let anchor = symbols.iter().position(|symbol| is_anchor(symbol));
    let target = anchor
        .and_then(|idx| symbols.get(idx + 1 + skip).or_else(|| symbols.get(idx + 1)))
        .copied();

    let func = target.and_then(symbol_func).unwrap_or_else(|| UNKNOWN.into());

    let (file, line) = match target.and_then(|s| Some((s.filename()?, s.lineno()?))) {
        Some((path, line)) => (short_path(path), line),
        None => (short_path(Path::new(hint.file())), hint.line()),
    };

    CallSite { file, line: line.max(1).to_string(), func }
}

fn is_anchor(symbol: &BacktraceSymbol) -> bool {
    symbol.name().is_some_and(|name| {
        let name = format!("{:#}", name);
        name.contains("caller::Capture") && name.ends_with("::take")
    })
}

/// Last path segment of the demangled symbol, e.g. `load` for `app::config::load`.
fn symbol_func(symbol: &BacktraceSymbol) -> Option<String> {
    let name = format!("{:#}", symbol.name()?);
    let last = name.rsplit("::").find(|segment| !segment.is_empty())?;
    let last = without_colons(last);
    (!last.is_empty()).then_some(last)
}

/// `<parent dir>/<file name>`, with `.` standing in for a missing parent.
fn short_path(path: &Path) -> String {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let dir = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".into());

    without_colons(&format!("{}/{}", dir, file))
}

// ':' separates file from line in the wire form.
fn without_colons(text: &str) -> String {
    text.replace(':', "")
}

/// File or function name as stored: colons removed, `unknown` when nothing is left.
pub(crate) fn site_field(raw: &str) -> String {
    let field = without_colons(raw);
    if field.is_empty() {
        UNKNOWN.into()
    } else {
        field
    }
}

/// Stack text as stored. Leading whitespace is dropped since the wire form
/// does not keep it.
pub(crate) fn stack_text(raw: &str) -> String {
    let stack = raw.trim_start();
    if stack.is_empty() {
        UNAVAILABLE_STACK.into()
    } else {
        stack.to_owned()
    }
}
