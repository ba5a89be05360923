//! Lexing framework: the driving loop and its contract.
//!
//! A grammar plugs in by supplying a token-kind type (implementing
//! [`TokenKind`]) and a [`Lexer`] that consumes segments from a
//! [`Reader`](crate::source::Reader) to produce one [`Token`] at a time.
//! [`TokenStream`] drives the lexer, caches produced tokens, and supports
//! lookahead and rollback for a downstream parser.
//!
//! Tokenization rules, including how ties and ambiguities are resolved, are
//! entirely the business of the supplied `Lexer` implementation.

mod stream;

pub use stream::TokenStream;

use thiserror::Error;

use crate::{
    diagnostic::Diagnostics,
    source::{Reader, Span},
};

/// Capability of a lexical category type: the only thing the driving loop
/// needs to know about a grammar's token kinds is which one marks end of
/// input.
pub trait TokenKind {
    /// Whether this kind marks end of input.
    fn is_eof(&self) -> bool;
}

/// A recoverable failure to produce a token.
///
/// The lexer that returned it has typically also raised a
/// [`Diagnostic`](crate::diagnostic::Diagnostic) carrying the details; this
/// value only signals that the current stream slot holds no token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("failed to produce a token")]
pub struct LexingError;

/// A classified, located unit of lexical meaning.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<K>
where
    K: TokenKind,
{
    /// The lexical category, supplied by the grammar.
    pub kind: K,
    /// Where in the source the token was scanned from.
    pub span: Span,
}

/// A lexer of some grammar: consumes zero or more segments from the reader
/// and produces one token per call.
///
/// On failure the implementation should leave the reader past whatever it
/// could not tokenize (so the driving loop makes progress) and raise a
/// diagnostic describing the problem, then return [`LexingError`]. Once the
/// reader hits end of input, `generate_token` must produce an EOF-kind
/// token.
pub trait Lexer {
    /// Token categories of this grammar.
    type TokenKind: TokenKind;

    /// Scans one token starting at the reader's current position.
    fn generate_token(
        &mut self,
        reader: &mut Reader,
        diagnostics: &mut Diagnostics,
    ) -> Result<Token<Self::TokenKind>, LexingError>;
}

impl<L> Lexer for &mut L
where
    L: Lexer + ?Sized,
{
    type TokenKind = L::TokenKind;

    fn generate_token(
        &mut self,
        reader: &mut Reader,
        diagnostics: &mut Diagnostics,
    ) -> Result<Token<Self::TokenKind>, LexingError> {
        (**self).generate_token(reader, diagnostics)
    }
}

impl<L> Lexer for Box<L>
where
    L: Lexer + ?Sized,
{
    type TokenKind = L::TokenKind;

    fn generate_token(
        &mut self,
        reader: &mut Reader,
        diagnostics: &mut Diagnostics,
    ) -> Result<Token<Self::TokenKind>, LexingError> {
        (**self).generate_token(reader, diagnostics)
    }
}
