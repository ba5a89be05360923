//! Ranges (spans) in a source code.

use std::{
    fmt,
    ops::{Bound, Deref, RangeBounds},
};

use thiserror::Error;

use super::{Location, Source};

/// Error of [`Span::try_slice`]: the requested range does not fit in the
/// span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("range {start}..{end} is out of bounds of a span of length {length}")]
pub struct SliceError {
    /// Normalized inclusive start of the requested range.
    pub start: usize,
    /// Normalized exclusive end of the requested range.
    pub end: usize,
    /// Length of the span being sliced.
    pub length: usize,
}

/// A half-open range `[start, end)` over a source's segments.
///
/// See [`Reader::span`](super::Reader::span) for the usual way of producing
/// spans while scanning.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: Location,
    length: usize,
}

impl Span {
    /// Creates a span from its two endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints refer to different sources or if `start` is
    /// past `end`; both are programming errors.
    pub fn new(start: Location, end: Location) -> Self {
        assert!(
            start.source() == end.source(),
            "span endpoints must refer to the same source, got {:?} and {:?}",
            start.source().name(),
            end.source().name(),
        );
        assert!(
            start.position() <= end.position(),
            "span start {} is past its end {}",
            start.position(),
            end.position(),
        );
        let length = end.position() - start.position();
        Self { start, length }
    }

    /// Creates a span from a start location and a length already known to be
    /// in bounds.
    pub(crate) fn from_parts(start: Location, length: usize) -> Self {
        Self { start, length }
    }

    /// The start location of the span.
    pub fn start(&self) -> Location {
        self.start.clone()
    }

    /// The end location of the span (exclusive).
    pub fn end(&self) -> Location {
        Location::new(self.source().clone(), self.start.position() + self.length)
    }

    /// The length of the span in segments.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the span covers no segments.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The source this span points into.
    pub fn source(&self) -> &Source {
        self.start.source()
    }

    /// The text the span covers.
    pub fn as_str(&self) -> &str {
        let start = self.start.position();
        self.source()
            .get(start..start + self.length)
            .expect("a span is always in bounds of its source")
    }

    /// Wraps this span in a type that displays its contents rather than its
    /// coordinates.
    pub fn content(&self) -> SpanContent {
        SpanContent { span: self.clone() }
    }

    /// Produces the sub-span covering `range`, counted in segments relative
    /// to this span's start.
    pub fn try_slice<R>(&self, range: R) -> Result<Self, SliceError>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&position) => position,
            Bound::Excluded(&position) => position.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&position) => position.saturating_add(1),
            Bound::Excluded(&position) => position,
            Bound::Unbounded => self.length,
        };

        if start <= end && end <= self.length {
            let start_loc = Location::new(
                self.source().clone(),
                self.start.position() + start,
            );
            Ok(Self::from_parts(start_loc, end - start))
        } else {
            Err(SliceError {
                start,
                end,
                length: self.length,
            })
        }
    }

    /// Produces the sub-span covering `range`, counted in segments relative
    /// to this span's start.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit in the span; [`Span::try_slice`] is
    /// the non-panicking form.
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        match self.try_slice(range) {
            Ok(span) => span,
            Err(error) => panic!("{}", error),
        }
    }

    /// Joins two spans into the smallest span containing both. Any hole
    /// between them is included.
    ///
    /// # Panics
    ///
    /// Panics if the spans refer to different sources.
    pub fn join(&self, other: &Self) -> Self {
        assert!(
            self.source() == other.source(),
            "cannot join spans of different sources ({:?} and {:?})",
            self.source().name(),
            other.source().name(),
        );
        let self_end = self.start.position() + self.length;
        let other_end = other.start.position() + other.length;
        if self.start.position() <= other.start.position() {
            Self::from_parts(
                self.start.clone(),
                self_end.max(other_end) - self.start.position(),
            )
        } else {
            Self::from_parts(
                other.start.clone(),
                self_end.max(other_end) - other.start.position(),
            )
        }
    }

    /// Expands the span to cover every line it touches in full, including
    /// the trailing newline of the last one, if any.
    pub fn expand_lines(&self) -> Self {
        self.start().line_span().join(&self.end().line_span())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.debug_struct("Span")
            .field("source", self.source())
            .field("start", &self.start.position())
            .field("end", &(self.start.position() + self.length))
            .field("content", &self.as_str())
            .finish()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        let (start_line, start_column) = self.start().line_column();
        let (end_line, end_column) = self.end().line_column();
        write!(
            fmtr,
            "in {} from ({}, {}) to ({}, {})",
            self.source(),
            start_line,
            start_column,
            end_line,
            end_column,
        )
    }
}

impl AsRef<str> for Span {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A wrapper that displays a span's contents rather than its coordinates.
#[derive(Debug, Clone)]
pub struct SpanContent {
    span: Span,
}

impl SpanContent {
    /// The wrapped span.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The covered text.
    pub fn as_str(&self) -> &str {
        self.span.as_str()
    }
}

impl Deref for SpanContent {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SpanContent {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.write_str(self.as_str())
    }
}

impl PartialEq for SpanContent {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SpanContent {}

impl PartialEq<str> for SpanContent {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SpanContent {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for SpanContent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
