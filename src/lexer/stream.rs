//! The token stream driving a lexer over a reader.

use tracing::{debug, trace};

use super::{Lexer, LexingError, Token, TokenKind};
use crate::{
    diagnostic::Diagnostics,
    source::{Reader, Source},
};

/// A lazily produced, cached sequence of tokens.
///
/// The stream keeps every produced result, so going back with
/// [`prev`](TokenStream::prev) or [`rollback`](TokenStream::rollback) and
/// re-reading replays from the cache without re-invoking the lexer.
///
/// State machine: the stream always holds a current slot (the first token is
/// produced eagerly on construction). [`next`](TokenStream::next) moves
/// forward until the current token is EOF-kind; from then on the stream is
/// terminal and `next` reports `false` forever, with no further side
/// effects.
#[derive(Debug, Clone)]
pub struct TokenStream<L>
where
    L: Lexer,
{
    reader: Reader,
    lexer: L,
    tokens: Vec<Result<Token<L::TokenKind>, LexingError>>,
    position: usize,
}

impl<L> TokenStream<L>
where
    L: Lexer,
{
    /// Opens a stream over the given source and produces its first token.
    pub fn new(source: &Source, lexer: L, diagnostics: &mut Diagnostics) -> Self {
        let mut this = Self {
            reader: source.reader(),
            lexer,
            tokens: Vec::new(),
            position: 0,
        };
        this.generate(diagnostics);
        this
    }

    /// Whether the current token marks end of input. An errored slot is not
    /// EOF.
    pub fn is_eof(&self) -> bool {
        self.current().is_ok_and(|token| token.kind.is_eof())
    }

    /// Index of the current token in the produced sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The source being tokenized.
    pub fn source(&self) -> &Source {
        self.reader.source()
    }

    /// The most recently read slot: either a token or the error produced in
    /// its place.
    pub fn current(&self) -> Result<&Token<L::TokenKind>, LexingError> {
        self.tokens[self.position].as_ref().map_err(|&error| error)
    }

    /// Moves to the next token, producing it if it was never read before.
    /// Returns `false` exactly when the current token is EOF-kind; the
    /// stream then stays put, forever.
    pub fn next(&mut self, diagnostics: &mut Diagnostics) -> bool {
        if self.is_eof() {
            false
        } else {
            self.position += 1;
            if self.position == self.tokens.len() {
                self.generate(diagnostics);
            } else {
                trace!(position = self.position, "replayed cached token");
            }
            true
        }
    }

    /// Moves back one token; returns whether it moved.
    pub fn prev(&mut self) -> bool {
        self.rollback(1) == 1
    }

    /// Moves forward by up to `count` tokens, stopping early at EOF, and
    /// returns how far it actually moved.
    pub fn advance(&mut self, count: usize, diagnostics: &mut Diagnostics) -> usize {
        let mut advanced = 0;
        while advanced < count && self.next(diagnostics) {
            advanced += 1;
        }
        advanced
    }

    /// Moves back by up to `count` tokens, clamping at the first one, and
    /// returns how far it actually moved.
    pub fn rollback(&mut self, count: usize) -> usize {
        let rolled = count.min(self.position);
        self.position -= rolled;
        rolled
    }

    /// Invokes the lexer once and caches whatever it produced.
    fn generate(&mut self, diagnostics: &mut Diagnostics) {
        let produced = self.lexer.generate_token(&mut self.reader, diagnostics);
        if produced.is_err() {
            debug!(
                source = %self.reader.source(),
                position = self.reader.position(),
                "lexer failed to produce a token",
            );
        }
        self.tokens.push(produced);
    }
}
