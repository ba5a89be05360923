//! # lexkit
//!
//! Core library for source text management, grapheme-aware lexing, and
//! compiler diagnostics.
//!
//! Positions are counted in *segments* — extended grapheme clusters, i.e.
//! user-perceived characters — so spans and columns stay meaningful for
//! combining marks, CJK text, CRLF line endings, and emoji sequences.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! lexer      → Lexer/TokenKind traits, Token, TokenStream
//!   ↓
//! diagnostic → Level, Diagnostic trait, Diagnostics accumulator
//!   ↓
//! source     → Source, Location, Span, Reader
//!   ↓
//! segment    → grapheme-cluster view and boundary iterators
//! ```
//!
//! ## Example
//!
//! A minimal s-expression lexer: words, parentheses, and nothing else.
//!
//! ```
//! use std::fmt;
//!
//! use lexkit::diagnostic::{Diagnostic, Diagnostics, Level};
//! use lexkit::lexer::{Lexer, LexingError, Token, TokenKind, TokenStream};
//! use lexkit::source::{Reader, Source, Span};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Word,
//!     OpenParen,
//!     CloseParen,
//!     Eof,
//! }
//!
//! impl TokenKind for Kind {
//!     fn is_eof(&self) -> bool {
//!         *self == Kind::Eof
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct UnknownSegment {
//!     span: Span,
//! }
//!
//! impl fmt::Display for UnknownSegment {
//!     fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
//!         write!(fmtr, "unknown character {:?}", self.span.as_str())
//!     }
//! }
//!
//! impl Diagnostic for UnknownSegment {
//!     fn level(&self) -> Level {
//!         Level::Error
//!     }
//!
//!     fn primary_span(&self) -> Option<Span> {
//!         Some(self.span.clone())
//!     }
//! }
//!
//! struct SexprLexer;
//!
//! impl Lexer for SexprLexer {
//!     type TokenKind = Kind;
//!
//!     fn generate_token(
//!         &mut self,
//!         reader: &mut Reader,
//!         diagnostics: &mut Diagnostics,
//!     ) -> Result<Token<Kind>, LexingError> {
//!         while reader.test(|segment| segment.is_whitespace()) {
//!             reader.next();
//!         }
//!         reader.mark();
//!
//!         if reader.is_eof() {
//!             Ok(Token { kind: Kind::Eof, span: reader.span() })
//!         } else if reader.test(|segment| segment.is_word_continue()) {
//!             while reader.test(|segment| segment.is_word_continue()) {
//!                 reader.next();
//!             }
//!             Ok(Token { kind: Kind::Word, span: reader.span() })
//!         } else if reader.expect("(") {
//!             Ok(Token { kind: Kind::OpenParen, span: reader.span() })
//!         } else if reader.expect(")") {
//!             Ok(Token { kind: Kind::CloseParen, span: reader.span() })
//!         } else {
//!             reader.next();
//!             diagnostics.raise(UnknownSegment { span: reader.span() });
//!             Err(LexingError)
//!         }
//!     }
//! }
//!
//! let source = Source::new("demo.sexp", "(add x y)");
//! let mut diagnostics = Diagnostics::new();
//! let mut tokens = TokenStream::new(&source, SexprLexer, &mut diagnostics);
//!
//! let token = tokens.current().unwrap();
//! assert_eq!(token.kind, Kind::OpenParen);
//! assert_eq!(token.span.as_str(), "(");
//!
//! assert!(tokens.next(&mut diagnostics));
//! let token = tokens.current().unwrap();
//! assert_eq!(token.kind, Kind::Word);
//! assert_eq!(token.span.as_str(), "add");
//! assert_eq!(token.span.start().line_column(), (1, 2));
//!
//! while !tokens.is_eof() {
//!     assert!(tokens.next(&mut diagnostics));
//! }
//! assert!(!tokens.next(&mut diagnostics));
//! assert!(diagnostics.is_ok());
//! ```

// ============================================================================
// MODULES (dependency order: segment → source → diagnostic → lexer)
// ============================================================================

/// Grapheme-cluster view and boundary iterators
pub mod segment;

/// Source text: Source, Location, Span, Reader
pub mod source;

/// Diagnostics: Level, Diagnostic trait, accumulator, report rendering
pub mod diagnostic;

/// Lexing framework: Lexer/TokenKind traits, Token, TokenStream
pub mod lexer;

// Re-export the types nearly every user needs
pub use diagnostic::{Diagnostic, Diagnostics, Level};
pub use lexer::{Lexer, LexingError, Token, TokenKind, TokenStream};
pub use segment::Segment;
pub use source::{Location, Reader, SliceError, Source, SourceIndex, Span, SpanContent};
