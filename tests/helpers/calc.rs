//! A small arithmetic grammar used to exercise the lexing framework:
//! numbers, identifiers, the four operators, parentheses, `#` line
//! comments.

use std::{cell::Cell, fmt, rc::Rc};

use lexkit::{
    Diagnostic, Diagnostics, Level, Lexer, LexingError, Reader, Source, Span, Token, TokenKind,
    TokenStream,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcKind {
    Number,
    Ident,
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
    Eof,
}

impl TokenKind for CalcKind {
    fn is_eof(&self) -> bool {
        *self == CalcKind::Eof
    }
}

/// Raised for any segment the grammar has no token for.
#[derive(Debug, Clone)]
pub struct UnknownChar {
    pub span: Span,
}

impl fmt::Display for UnknownChar {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        write!(fmtr, "unknown character {:?}", self.span.as_str())
    }
}

impl Diagnostic for UnknownChar {
    fn level(&self) -> Level {
        Level::Error
    }

    fn primary_span(&self) -> Option<Span> {
        Some(self.span.clone())
    }
}

/// The lexer itself. `calls` counts `generate_token` invocations so tests
/// can check that rollback replays from the cache.
#[derive(Debug, Clone, Default)]
pub struct CalcLexer {
    pub calls: Rc<Cell<usize>>,
}

impl CalcLexer {
    fn skip_discardable(&self, reader: &mut Reader) {
        loop {
            if reader.test(|segment| segment.is_whitespace()) {
                reader.next();
            } else if reader.test(|segment| segment == &"#") {
                while !reader.test_or_eof(|segment| segment.is_newline()) {
                    reader.next();
                }
            } else {
                break;
            }
        }
    }

    fn punctuation(segment: &str) -> Option<CalcKind> {
        match segment {
            "+" => Some(CalcKind::Plus),
            "-" => Some(CalcKind::Minus),
            "*" => Some(CalcKind::Star),
            "/" => Some(CalcKind::Slash),
            "(" => Some(CalcKind::OpenParen),
            ")" => Some(CalcKind::CloseParen),
            _ => None,
        }
    }
}

impl Lexer for CalcLexer {
    type TokenKind = CalcKind;

    fn generate_token(
        &mut self,
        reader: &mut Reader,
        diagnostics: &mut Diagnostics,
    ) -> Result<Token<CalcKind>, LexingError> {
        self.calls.set(self.calls.get() + 1);
        self.skip_discardable(reader);
        reader.mark();

        if reader.is_eof() {
            return Ok(Token {
                kind: CalcKind::Eof,
                span: reader.span(),
            });
        }

        if reader.test(|segment| segment.is_ascii_digit()) {
            while reader.test(|segment| segment.is_ascii_digit()) {
                reader.next();
            }
            return Ok(Token {
                kind: CalcKind::Number,
                span: reader.span(),
            });
        }

        if reader.test(|segment| segment.is_word_start()) {
            while reader.test(|segment| segment.is_word_continue()) {
                reader.next();
            }
            return Ok(Token {
                kind: CalcKind::Ident,
                span: reader.span(),
            });
        }

        let punctuation = reader
            .current()
            .and_then(|segment| Self::punctuation(segment.as_str()));
        if let Some(kind) = punctuation {
            reader.next();
            return Ok(Token {
                kind,
                span: reader.span(),
            });
        }

        reader.next();
        diagnostics.raise(UnknownChar {
            span: reader.span(),
        });
        Err(LexingError)
    }
}

/// Lexes the whole input, returning every produced slot (the terminal EOF
/// token included) and the collected diagnostics.
pub fn lex_all(input: &str) -> (Vec<Result<Token<CalcKind>, LexingError>>, Diagnostics) {
    let source = Source::new("calc.test", input);
    let mut diagnostics = Diagnostics::new();
    let mut stream = TokenStream::new(&source, CalcLexer::default(), &mut diagnostics);

    let mut slots = vec![stream.current().cloned()];
    while stream.next(&mut diagnostics) {
        slots.push(stream.current().cloned());
    }
    (slots, diagnostics)
}

/// Convenience form of [`lex_all`] keeping only the successful tokens.
pub fn lex_tokens(input: &str) -> (Vec<Token<CalcKind>>, Diagnostics) {
    let (slots, diagnostics) = lex_all(input);
    let tokens = slots.into_iter().filter_map(Result::ok).collect();
    (tokens, diagnostics)
}
