//! Cursor-based navigation over a source code.

use super::{Location, Source, Span};
use crate::segment::Segment;

/// A cheap, clonable cursor over the segments of a [`Source`].
///
/// Cloning duplicates the cursor state while sharing the underlying text;
/// a clone is the supported mechanism for speculative lookahead (clone,
/// attempt, then adopt or discard).
///
/// Boundary policy: [`advance`](Reader::advance) and
/// [`rollback`](Reader::rollback) clamp at the source boundaries and report
/// how far they actually moved. They never panic.
#[derive(Debug, Clone)]
pub struct Reader {
    source: Source,
    /// Current position in segments.
    position: usize,
    /// Position recorded by the last [`mark`](Reader::mark).
    marked: usize,
}

impl Reader {
    /// Creates a reader at the start of the given source.
    pub fn new(source: Source) -> Self {
        Self {
            source,
            position: 0,
            marked: 0,
        }
    }

    /// Whether the end of the source is reached.
    pub fn is_eof(&self) -> bool {
        self.position == self.source.len()
    }

    /// Current position in segments.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The position recorded by the last [`mark`](Reader::mark), or `0`.
    pub fn marked(&self) -> usize {
        self.marked
    }

    /// The source this reader is reading.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The segment at the current position, or `None` at end of source.
    pub fn current(&self) -> Option<Segment<'_>> {
        self.source.get(self.position).map(Segment::new_unchecked)
    }

    /// The text of the segment at the current position, or `None` at end of
    /// source.
    pub fn current_str(&self) -> Option<&str> {
        self.source.get(self.position)
    }

    /// The text from the current position spanning `additional` segments,
    /// or `None` when fewer remain.
    pub fn current_to(&self, additional: usize) -> Option<&str> {
        self.source.get(self.position..self.position + additional)
    }

    /// A [`Location`] at the current position.
    pub fn location(&self) -> Location {
        Location::new(self.source.clone(), self.position)
    }

    /// The [`Span`] between the marked position and the current position,
    /// whichever order they are in.
    pub fn span(&self) -> Span {
        if self.marked <= self.position {
            let start = Location::new(self.source.clone(), self.marked);
            Span::from_parts(start, self.position - self.marked)
        } else {
            Span::from_parts(self.location(), self.marked - self.position)
        }
    }

    /// Records the current position as the reference point for
    /// [`span`](Reader::span).
    pub fn mark(&mut self) {
        self.marked = self.position;
    }

    /// Advances by one segment; returns whether the step happened.
    pub fn next(&mut self) -> bool {
        self.advance(1) == 1
    }

    /// Goes back one segment; returns whether the step happened.
    pub fn prev(&mut self) -> bool {
        self.rollback(1) == 1
    }

    /// Advances by up to `count` segments, clamping at the end of the
    /// source, and returns how far it actually moved.
    pub fn advance(&mut self, count: usize) -> usize {
        let advanced = count.min(self.source.len() - self.position);
        self.position += advanced;
        advanced
    }

    /// Goes back by up to `count` segments, clamping at the start of the
    /// source, and returns how far it actually moved.
    pub fn rollback(&mut self, count: usize) -> usize {
        let rolled = count.min(self.position);
        self.position -= rolled;
        rolled
    }

    /// Applies a predicate to the current segment. `false` at end of
    /// source.
    pub fn test<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&Segment<'_>) -> bool,
    {
        self.current().is_some_and(|segment| predicate(&segment))
    }

    /// Applies a predicate to the current segment. `true` at end of source;
    /// useful for "ends here or at end of input" conditions.
    pub fn test_or_eof<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&Segment<'_>) -> bool,
    {
        self.current().is_none_or(|segment| predicate(&segment))
    }

    /// Consumes the given literal if the upcoming segments spell it out
    /// exactly, segment by segment. On a partial match the reader is rolled
    /// back to where it started and `false` is returned.
    pub fn expect(&mut self, mut expected: &str) -> bool {
        let mut consumed = 0;

        while !expected.is_empty() {
            let matched = self
                .current()
                .filter(|segment| expected.starts_with(segment.as_str()));
            match matched {
                Some(segment) => {
                    expected = &expected[segment.as_str().len()..];
                    consumed += 1;
                    self.next();
                }
                None => {
                    self.rollback(consumed);
                    return false;
                }
            }
        }

        true
    }
}
