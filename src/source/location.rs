//! Positions in a source code.

use std::fmt;

use super::{Source, Span};

/// A position in a source, counted in segments.
///
/// Ordering compares the source identity first, then the position, so
/// locations of the same source order by position.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    source: Source,
    position: usize,
}

impl Location {
    /// Creates a location at the given segment position of a source.
    ///
    /// # Panics
    ///
    /// Panics if the position is past the end of the source (`position >
    /// source.len()`); the end itself is a valid location.
    pub fn new(source: Source, position: usize) -> Self {
        assert!(
            position <= source.len(),
            "location position {} out of bounds of source {:?} (length {})",
            position,
            source.name(),
            source.len(),
        );
        Self { source, position }
    }

    /// The segment position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The source this location points into.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The 1-based line number of this location. A newline segment still
    /// counts on the line it terminates.
    pub fn line(&self) -> usize {
        self.source.line_of(self.position) + 1
    }

    /// The 1-based column number of this location: the distance from the
    /// start of its line, plus one.
    pub fn column(&self) -> usize {
        let (_, column) = self.line_column();
        column
    }

    /// Both the 1-based line and column numbers, counted in one pass.
    pub fn line_column(&self) -> (usize, usize) {
        let line = self.source.line_of(self.position);
        let line_start = self.source.line_start(line);
        (line + 1, self.position - line_start + 1)
    }

    /// The [`Span`] covering the whole line this location is in, including
    /// its terminating newline segment, if any.
    pub fn line_span(&self) -> Span {
        let line = self.source.line_of(self.position);
        let init = self.source.line_start(line);
        let end = self
            .source
            .try_line_start(line + 1)
            .unwrap_or(self.source.len());
        Span::from_parts(Self::new(self.source.clone(), init), end - init)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        let (line, column) = self.line_column();
        fmtr.debug_struct("Location")
            .field("source", &self.source)
            .field("position", &self.position)
            .field("line", &line)
            .field("column", &column)
            .finish()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        let (line, column) = self.line_column();
        write!(fmtr, "in {} ({}, {})", self.source, line, column)
    }
}
