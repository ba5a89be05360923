//! Segment-position indexing of a source.
//!
//! [`SourceIndex`] translates segment positions into byte ranges of the
//! underlying text. A single `usize` yields one grapheme cluster; any range
//! kind yields the covered slice.

use std::{
    fmt,
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

use super::Source;

/// A type usable to index a [`Source`] by segment positions.
///
/// Implemented for `usize` and for all standard range types over `usize`.
/// Both access tiers of the data-access contract are provided: [`get`]
/// returns `None` out of bounds, [`index`] panics.
///
/// [`get`]: SourceIndex::get
/// [`index`]: SourceIndex::index
pub trait SourceIndex {
    /// Result of the lookup, borrowed from the source's contents.
    type Output: ?Sized;

    /// Looks this index up in the given source, `None` when out of bounds.
    fn get(self, source: &Source) -> Option<&Self::Output>;

    /// Looks this index up in the given source.
    ///
    /// # Panics
    ///
    /// Panics when out of bounds.
    fn index(self, source: &Source) -> &Self::Output;
}

impl SourceIndex for usize {
    type Output = str;

    fn get(self, source: &Source) -> Option<&str> {
        let start = source.byte_offset(self)?;
        let end = source.byte_offset(self + 1)?;
        Some(&source.contents()[usize::from(start)..usize::from(end)])
    }

    fn index(self, source: &Source) -> &str {
        match self.get(source) {
            Some(slice) => slice,
            None => bad_index(self, source),
        }
    }
}

/// Slices the source over `start..end` segment positions, both already
/// normalized and checked to be in `0..=len` with `start <= end`.
fn slice_segments(source: &Source, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let start = source.byte_offset(start)?;
    let end = source.byte_offset(end)?;
    Some(&source.contents()[usize::from(start)..usize::from(end)])
}

fn bad_index<I>(indexer: I, source: &Source) -> !
where
    I: fmt::Debug,
{
    panic!(
        "segment index {:?} out of bounds of source {:?} (length {})",
        indexer,
        source.name(),
        source.len(),
    )
}

macro_rules! impl_range_index {
    ($ty:ty, |$this:ident, $source:ident| $bounds:expr) => {
        impl SourceIndex for $ty {
            type Output = str;

            fn get(self, source: &Source) -> Option<&str> {
                #[allow(unused_variables)]
                let ($this, $source) = (&self, source);
                let (start, end) = $bounds;
                slice_segments(source, start, end)
            }

            fn index(self, source: &Source) -> &str {
                match self.clone().get(source) {
                    Some(slice) => slice,
                    None => bad_index(self, source),
                }
            }
        }
    };
}

impl_range_index! { Range<usize>, |this, source| (this.start, this.end) }
impl_range_index! { RangeTo<usize>, |this, source| (0, this.end) }
impl_range_index! { RangeFrom<usize>, |this, source| (this.start, source.len()) }
impl_range_index! { RangeFull, |this, source| (0, source.len()) }
impl_range_index! {
    RangeInclusive<usize>,
    |this, source| (*this.start(), this.end().saturating_add(1))
}
impl_range_index! {
    RangeToInclusive<usize>,
    |this, source| (0, this.end.saturating_add(1))
}
