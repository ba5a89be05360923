//! Source text management.
//!
//! A [`Source`] owns one immutable piece of input text (a file, a REPL line)
//! together with its name, pre-segmented into grapheme clusters. Everything
//! that points into the text — [`Location`], [`Span`], [`Reader`] — shares
//! the same allocation, so spans remain valid for as long as anyone holds
//! them.
//!
//! # Example
//!
//! ```
//! use lexkit::source::Source;
//!
//! let source = Source::new("greeting.txt", "hello\nworld");
//!
//! let mut reader = source.reader();
//! reader.mark();
//! reader.advance(5);
//!
//! let span = reader.span();
//! assert_eq!(span.as_str(), "hello");
//! assert_eq!(span.start().line_column(), (1, 1));
//! assert_eq!(span.end().line_column(), (1, 6));
//! ```

mod indexing;
mod location;
mod reader;
mod span;

pub use indexing::SourceIndex;
pub use location::Location;
pub use reader::Reader;
pub use span::{SliceError, Span, SpanContent};

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
    sync::Arc,
};

use smol_str::SmolStr;
use text_size::TextSize;
use tracing::debug;

use crate::segment;

/// Shared payload of a source.
#[derive(Debug)]
struct SourceInner {
    /// Display name, usually a file path.
    name: SmolStr,
    /// The text itself.
    contents: Box<str>,
    /// Byte offset of every segment boundary; `len + 1` entries, the last
    /// one being the byte length of the contents.
    segments: Box<[TextSize]>,
    /// Segment positions of newline clusters, ascending.
    newlines: Box<[usize]>,
}

/// A source code object. Cloning is cheap: clones share the same text and
/// segmentation tables behind a reference count.
///
/// Equality, ordering and hashing follow the identity of the shared
/// allocation, not the text, so two separately constructed sources never
/// compare equal.
#[derive(Clone)]
pub struct Source {
    inner: Arc<SourceInner>,
}

impl Source {
    /// Creates a new source from its name and contents. Never fails; the
    /// contents are segmented into grapheme clusters in a single pass.
    pub fn new(name: impl Into<SmolStr>, contents: impl Into<Box<str>>) -> Self {
        let name = name.into();
        let contents = contents.into();

        let mut segments = Vec::new();
        let mut newlines = Vec::new();
        for (offset, cluster) in segment::segment_indices(&contents) {
            if cluster.is_newline() {
                newlines.push(segments.len());
            }
            segments.push(TextSize::new(offset as u32));
        }
        segments.push(TextSize::of(&*contents));

        debug!(
            name = %name,
            segments = segments.len() - 1,
            newlines = newlines.len(),
            "indexed source",
        );

        let inner = SourceInner {
            name,
            contents,
            segments: segments.into(),
            newlines: newlines.into(),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The (file) name of the source.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The length of the source in segments.
    pub fn len(&self) -> usize {
        self.inner.segments.len() - 1
    }

    /// Whether the source holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full text of the source.
    pub fn contents(&self) -> &str {
        &self.inner.contents
    }

    /// Indexes the source by a segment position (yielding one cluster) or a
    /// range of positions (yielding the covered slice). Returns `None` when
    /// out of bounds; see the `Index` impl for the panicking form.
    pub fn get<I>(&self, indexer: I) -> Option<&I::Output>
    where
        I: SourceIndex,
    {
        indexer.get(self)
    }

    /// Iterator over the byte offsets of segment boundaries. Yields
    /// `len() + 1` offsets, the last being the byte length of the contents.
    pub fn segments(&self) -> SegmentOffsets<'_> {
        SegmentOffsets {
            inner: self.inner.segments.iter(),
        }
    }

    /// Iterator over the segment positions of newline clusters.
    pub fn newlines(&self) -> NewlineIndices<'_> {
        NewlineIndices {
            inner: self.inner.newlines.iter(),
        }
    }

    /// Opens a [`Reader`] cursor at the start of this source.
    pub fn reader(&self) -> Reader {
        Reader::new(self.clone())
    }

    /// Byte offset of the given segment position.
    fn byte_offset(&self, position: usize) -> Option<TextSize> {
        self.inner.segments.get(position).copied()
    }

    /// Zero-based line index containing the given segment position. A
    /// newline cluster belongs to the line it terminates.
    fn line_of(&self, position: usize) -> usize {
        match self.inner.newlines.binary_search(&position) {
            Ok(n) | Err(n) => n,
        }
    }

    /// Segment position where the given zero-based line starts.
    ///
    /// # Panics
    ///
    /// Panics if the line does not exist.
    fn line_start(&self, line: usize) -> usize {
        match self.try_line_start(line) {
            Some(position) => position,
            None => panic!(
                "line index {} out of bounds of source {:?}",
                line,
                self.name(),
            ),
        }
    }

    /// Segment position where the given zero-based line starts, or `None`
    /// when the line does not exist.
    fn try_line_start(&self, line: usize) -> Option<usize> {
        if line == 0 {
            Some(0)
        } else {
            self.inner
                .newlines
                .get(line - 1)
                .map(|&position| position + 1)
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.debug_struct("Source")
            .field("name", &self.name())
            .field("contents", &self.contents())
            .field("id", &Arc::as_ptr(&self.inner))
            .finish()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.write_str(self.name())
    }
}

impl<I> Index<I> for Source
where
    I: SourceIndex,
{
    type Output = I::Output;

    fn index(&self, indexer: I) -> &Self::Output {
        indexer.index(self)
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Source {}

impl PartialOrd for Source {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Source {
    fn cmp(&self, other: &Self) -> Ordering {
        Arc::as_ptr(&self.inner).cmp(&Arc::as_ptr(&other.inner))
    }
}

impl Hash for Source {
    fn hash<H>(&self, hasher: &mut H)
    where
        H: Hasher,
    {
        Arc::as_ptr(&self.inner).hash(hasher)
    }
}

/// Iterator over the byte offsets of a source's segment boundaries.
#[derive(Debug, Clone)]
pub struct SegmentOffsets<'src> {
    inner: std::slice::Iter<'src, TextSize>,
}

impl Iterator for SegmentOffsets<'_> {
    type Item = TextSize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for SegmentOffsets<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for SegmentOffsets<'_> {}

/// Iterator over the segment positions of a source's newline clusters.
#[derive(Debug, Clone)]
pub struct NewlineIndices<'src> {
    inner: std::slice::Iter<'src, usize>,
}

impl Iterator for NewlineIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for NewlineIndices<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for NewlineIndices<'_> {}
