//! Grapheme-cluster segmentation utilities.
//!
//! The atomic unit of position counting in this crate is the *segment*: one
//! extended grapheme cluster, i.e. one user-perceived character. A cluster
//! may be a single scalar (`a`), a scalar plus combining marks (`ā̤́`), a CRLF
//! pair, or a multi-scalar emoji sequence. All boundary analysis is delegated
//! to the `unicode-segmentation` crate; this module only adds a typed view
//! ([`Segment`]) and restartable iterator adapters.

use std::fmt;

use text_size::TextSize;
use unicode_segmentation::UnicodeSegmentation;

/// A borrowed view of a single extended grapheme cluster.
///
/// Cheap to copy; the underlying text is owned elsewhere (usually by a
/// [`Source`](crate::source::Source)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    text: &'a str,
}

impl<'a> Segment<'a> {
    /// Creates a segment from a string slice, checking that the slice is
    /// exactly one grapheme cluster. Returns `None` otherwise (including for
    /// the empty string).
    pub fn new(text: &'a str) -> Option<Self> {
        let mut clusters = text.graphemes(true);
        if clusters.next().is_some() && clusters.next().is_none() {
            Some(Self { text })
        } else {
            None
        }
    }

    /// Only call this with a slice known to be a single grapheme cluster.
    pub(crate) fn new_unchecked(text: &'a str) -> Self {
        Self { text }
    }

    /// The cluster's text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the cluster in bytes.
    pub fn byte_len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    /// How many Unicode scalar values compose this cluster.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The cluster as a single `char`, when it is composed of exactly one
    /// scalar value.
    pub fn to_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        chars.next().filter(|_| chars.next().is_none())
    }

    /// The first scalar value of the cluster, ignoring combining marks.
    pub fn base_char(&self) -> char {
        // A grapheme cluster is never empty.
        match self.text.chars().next() {
            Some(ch) => ch,
            None => unreachable!("a grapheme cluster has at least one scalar"),
        }
    }

    /// Whether the cluster carries combining marks or joined scalars beyond
    /// its base character.
    pub fn has_marks(&self) -> bool {
        let mut chars = self.text.chars();
        chars.next();
        chars.next().is_some()
    }

    /// Whether this cluster terminates a line. Recognizes `"\n"`, the CRLF
    /// pair `"\r\n"` (a single cluster), and bare `"\r"`.
    pub fn is_newline(&self) -> bool {
        matches!(self.text, "\n" | "\r\n" | "\r")
    }

    /// Whether the base character is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.base_char().is_whitespace()
    }

    /// Whether the base character is alphabetic.
    pub fn is_alphabetic(&self) -> bool {
        self.base_char().is_alphabetic()
    }

    /// Whether the base character is numeric.
    pub fn is_numeric(&self) -> bool {
        self.base_char().is_numeric()
    }

    /// Whether the base character is alphabetic or numeric.
    pub fn is_alphanumeric(&self) -> bool {
        self.base_char().is_alphanumeric()
    }

    /// Whether the cluster is a single ASCII alphanumeric character.
    pub fn is_ascii_alphanumeric(&self) -> bool {
        self.to_char().is_some_and(|ch| ch.is_ascii_alphanumeric())
    }

    /// Whether the cluster is a single ASCII digit.
    pub fn is_ascii_digit(&self) -> bool {
        self.to_char().is_some_and(|ch| ch.is_ascii_digit())
    }

    /// Whether the base character is a digit in the given base (2 to 36).
    pub fn is_digit(&self, base: u32) -> bool {
        self.base_char().is_digit(base)
    }

    /// Converts the base character to a digit in the given base (2 to 36).
    pub fn to_digit(&self, base: u32) -> Option<u32> {
        self.base_char().to_digit(base)
    }

    /// Whether this cluster may start an identifier, per Unicode Standard
    /// Annex #31. Combining marks on the base character are accepted when
    /// they continue an identifier.
    pub fn is_word_start(&self) -> bool {
        let mut chars = self.text.chars();
        chars.next().is_some_and(unicode_ident::is_xid_start)
            && chars.all(unicode_ident::is_xid_continue)
    }

    /// Whether this cluster may continue an identifier, per Unicode Standard
    /// Annex #31.
    pub fn is_word_continue(&self) -> bool {
        self.text.chars().all(unicode_ident::is_xid_continue)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.text, fmtr)
    }
}

impl PartialEq<str> for Segment<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Segment<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<Segment<'_>> for str {
    fn eq(&self, other: &Segment<'_>) -> bool {
        self == other.text
    }
}

impl PartialEq<Segment<'_>> for &str {
    fn eq(&self, other: &Segment<'_>) -> bool {
        *self == other.text
    }
}

impl AsRef<str> for Segment<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// Iterates over the grapheme clusters of a string.
pub fn segments(input: &str) -> Segments<'_> {
    Segments {
        inner: input.graphemes(true),
    }
}

/// Iterates over the grapheme clusters of a string together with their byte
/// offsets.
pub fn segment_indices(input: &str) -> SegmentIndices<'_> {
    SegmentIndices {
        inner: input.grapheme_indices(true),
    }
}

/// Iterates over the word-bounded pieces of a string (UAX #29 word
/// boundaries). Whitespace and punctuation runs are yielded too, so the
/// concatenation of all pieces is the original string.
pub fn word_bounds(input: &str) -> WordBounds<'_> {
    WordBounds {
        inner: input.split_word_bounds(),
    }
}

/// Iterates over the sentence-bounded pieces of a string (UAX #29 sentence
/// boundaries).
pub fn sentence_bounds(input: &str) -> SentenceBounds<'_> {
    SentenceBounds {
        inner: input.split_sentence_bounds(),
    }
}

/// Iterator over grapheme clusters of a string.
#[derive(Debug, Clone)]
pub struct Segments<'input> {
    inner: unicode_segmentation::Graphemes<'input>,
}

impl<'input> Iterator for Segments<'input> {
    type Item = Segment<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Segment::new_unchecked)
    }
}

impl<'input> DoubleEndedIterator for Segments<'input> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Segment::new_unchecked)
    }
}

/// Iterator over grapheme clusters and their byte offsets.
#[derive(Debug, Clone)]
pub struct SegmentIndices<'input> {
    inner: unicode_segmentation::GraphemeIndices<'input>,
}

impl<'input> Iterator for SegmentIndices<'input> {
    type Item = (usize, Segment<'input>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(offset, text)| (offset, Segment::new_unchecked(text)))
    }
}

impl<'input> DoubleEndedIterator for SegmentIndices<'input> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(offset, text)| (offset, Segment::new_unchecked(text)))
    }
}

/// Iterator over word-bounded pieces of a string.
#[derive(Debug, Clone)]
pub struct WordBounds<'input> {
    inner: unicode_segmentation::UWordBounds<'input>,
}

impl<'input> Iterator for WordBounds<'input> {
    type Item = &'input str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'input> DoubleEndedIterator for WordBounds<'input> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterator over sentence-bounded pieces of a string.
#[derive(Debug, Clone)]
pub struct SentenceBounds<'input> {
    inner: unicode_segmentation::USentenceBounds<'input>,
}

impl<'input> Iterator for SentenceBounds<'input> {
    type Item = &'input str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
