//! Diagnostics reported while processing a source.
//!
//! [`Diagnostics`] is purely an accumulator: raising an Error-level
//! diagnostic never halts anything by itself. Callers decide when to stop,
//! typically by checking [`Diagnostics::is_err`] between phases.

use std::{fmt, slice, vec};

use tracing::trace;

use crate::source::Span;

/// Severity level of a diagnostic. Ordered: `Note < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Just a note, easily ignored.
    Note,
    /// Worth reading carefully, but not fatal.
    Warning,
    /// A hard error.
    Error,
}

impl Level {
    /// Lowercase name of the level, as used in rendered reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.write_str(self.as_str())
    }
}

/// A problem or note found in a source code.
///
/// The `Display` impl provides the message; `level` the severity;
/// `primary_span` and `secondary_spans` the location context used when the
/// diagnostic is rendered for a user.
pub trait Diagnostic: fmt::Debug + fmt::Display {
    /// Severity of this diagnostic.
    fn level(&self) -> Level;

    /// The main span the diagnostic points at, if any.
    fn primary_span(&self) -> Option<Span> {
        None
    }

    /// Additional spans giving context, if any.
    fn secondary_spans(&self) -> Vec<Span> {
        Vec::new()
    }
}

/// An ordered collection of diagnostics with a cached maximum level.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Box<dyn Diagnostic + Send + Sync>>,
    max_level: Option<Level>,
}

impl Diagnostics {
    /// Creates an empty collection; its maximum level is unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic and lifts the cached maximum level.
    pub fn raise(&mut self, diagnostic: impl Diagnostic + Send + Sync + 'static) {
        let level = diagnostic.level();
        trace!(level = %level, message = %diagnostic, "raised diagnostic");
        self.max_level = Some(match self.max_level {
            Some(current) => current.max(level),
            None => level,
        });
        self.entries.push(Box::new(diagnostic));
    }

    /// The highest level raised so far, or `None` when empty.
    pub fn max_level(&self) -> Option<Level> {
        self.max_level
    }

    /// Whether no Error-level diagnostic has been raised.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Whether at least one Error-level diagnostic has been raised.
    pub fn is_err(&self) -> bool {
        self.max_level == Some(Level::Error)
    }

    /// How many diagnostics have been raised.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no diagnostic has been raised at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the diagnostics in insertion order. Restartable; call
    /// again for a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

/// Renders every diagnostic as a report: a `level: message` headline, the
/// primary locus and its source line(s), then any secondary loci.
impl fmt::Display for Diagnostics {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        for diagnostic in self {
            writeln!(fmtr, "{}: {}", diagnostic.level(), diagnostic)?;
            if let Some(span) = diagnostic.primary_span() {
                writeln!(fmtr, "  --> {}", span.start())?;
                for line in span.expand_lines().as_str().lines() {
                    writeln!(fmtr, "   | {}", line)?;
                }
            }
            for span in diagnostic.secondary_spans() {
                writeln!(fmtr, "  see also {}", span)?;
            }
        }
        Ok(())
    }
}

/// Borrowed iterator over a [`Diagnostics`] collection.
#[derive(Debug)]
pub struct Iter<'diag> {
    inner: slice::Iter<'diag, Box<dyn Diagnostic + Send + Sync>>,
}

impl<'diag> Iterator for Iter<'diag> {
    type Item = &'diag (dyn Diagnostic + Send + Sync);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|boxed| boxed.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'diag> IntoIterator for &'diag Diagnostics {
    type Item = &'diag (dyn Diagnostic + Send + Sync);
    type IntoIter = Iter<'diag>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Owned, one-shot iterator over a [`Diagnostics`] collection.
#[derive(Debug)]
pub struct IntoIter {
    inner: vec::IntoIter<Box<dyn Diagnostic + Send + Sync>>,
}

impl Iterator for IntoIter {
    type Item = Box<dyn Diagnostic + Send + Sync>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Diagnostics {
    type Item = Box<dyn Diagnostic + Send + Sync>;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}
