//! Contains the common [`ErrorKind`] trait implemented by every kind of error in the workspace,
//! and the spanned [`Error`] container that carries one of them to the caller.
//!
//! Errors are never recovered from inside the library: parsing, simplifying and differentiating
//! all stop at the first error and hand it back. The caller decides how to present it, usually by
//! building an [`ariadne`] report with [`Error::build_report`].

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur while parsing, simplifying or differentiating an
/// expression.
///
/// This trait is usually derived with `#[derive(ErrorKind)]` from the `dx-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync + 'static {
    /// Returns the kind as [`Any`], so that the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    ///
    /// `spans` may be empty if the error did not originate from a region of source code, in which
    /// case the report points at the start of the source.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that is not tied to any region of source code.
    pub fn unspanned(kind: impl ErrorKind) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Attaches the given span to this error, unless it already points somewhere.
    pub fn or_span(mut self, span: Range<usize>) -> Self {
        if self.spans.is_empty() {
            self.spans.push(span);
        }
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
