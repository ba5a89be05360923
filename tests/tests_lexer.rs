//! Token stream behavior: token production, caching, rollback replay,
//! and recovery after lexing errors.

mod helpers;

use helpers::{
    calc::{lex_all, lex_tokens, CalcKind, CalcLexer},
    source_fixtures::CALC_PROGRAM,
};
use lexkit::{Diagnostics, Source, TokenStream};
use rstest::rstest;

#[test]
fn test_lexes_short_expression() {
    let (tokens, diagnostics) = lex_tokens("12+3");
    assert!(diagnostics.is_ok());

    let summary: Vec<(CalcKind, &str, usize)> = tokens
        .iter()
        .map(|token| (token.kind, token.span.as_str(), token.span.start().position()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (CalcKind::Number, "12", 0),
            (CalcKind::Plus, "+", 2),
            (CalcKind::Number, "3", 3),
            (CalcKind::Eof, "", 4),
        ],
    );
}

#[test]
fn test_skips_whitespace_and_comments() {
    let (tokens, diagnostics) = lex_tokens(CALC_PROGRAM);
    assert!(diagnostics.is_ok());

    let kinds: Vec<CalcKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CalcKind::OpenParen,
            CalcKind::Ident,
            CalcKind::Plus,
            CalcKind::Number,
            CalcKind::CloseParen,
            CalcKind::Star,
            CalcKind::Ident,
            CalcKind::Eof,
        ],
    );
    assert_eq!(tokens[1].span.as_str(), "price");
    assert_eq!(tokens[6].span.as_str(), "count");
}

#[rstest]
#[case("", 1)]
#[case("   # only a comment", 1)]
#[case("x", 2)]
fn test_terminal_token_is_eof(#[case] input: &str, #[case] produced: usize) {
    let (tokens, diagnostics) = lex_tokens(input);
    assert!(diagnostics.is_ok());
    assert_eq!(tokens.len(), produced);
    assert_eq!(tokens.last().map(|token| token.kind), Some(CalcKind::Eof));
    // The EOF span is empty and sits at the end of the input.
    let eof = &tokens[produced - 1];
    assert!(eof.span.is_empty());
    assert_eq!(eof.span.end().position(), eof.span.source().len());
}

#[test]
fn test_stream_stops_at_eof() {
    let source = Source::new("calc.test", "1");
    let mut diagnostics = Diagnostics::new();
    let mut stream = TokenStream::new(&source, CalcLexer::default(), &mut diagnostics);

    assert!(stream.next(&mut diagnostics));
    assert!(stream.is_eof());
    // Repeated calls stay put on the terminal token.
    assert!(!stream.next(&mut diagnostics));
    assert!(!stream.next(&mut diagnostics));
    assert!(stream.is_eof());
    assert_eq!(stream.current().map(|token| token.kind), Ok(CalcKind::Eof));
}

#[test]
fn test_rollback_replays_from_cache() {
    let source = Source::new("calc.test", "1+2");
    let mut diagnostics = Diagnostics::new();
    let lexer = CalcLexer::default();
    let calls = lexer.calls.clone();
    let mut stream = TokenStream::new(&source, lexer, &mut diagnostics);

    let mut first_pass = vec![stream.current().cloned()];
    while stream.next(&mut diagnostics) {
        first_pass.push(stream.current().cloned());
    }
    let generated = calls.get();
    assert_eq!(generated, 4);

    assert_eq!(stream.rollback(first_pass.len() - 1), first_pass.len() - 1);
    let mut second_pass = vec![stream.current().cloned()];
    while stream.next(&mut diagnostics) {
        second_pass.push(stream.current().cloned());
    }

    // The replay touched only the cache.
    assert_eq!(calls.get(), generated);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_prev_steps_back_one_token() {
    let source = Source::new("calc.test", "1+2");
    let mut diagnostics = Diagnostics::new();
    let mut stream = TokenStream::new(&source, CalcLexer::default(), &mut diagnostics);

    assert!(stream.next(&mut diagnostics));
    assert_eq!(stream.current().map(|token| token.kind), Ok(CalcKind::Plus));
    assert!(stream.prev());
    assert_eq!(
        stream.current().map(|token| token.kind),
        Ok(CalcKind::Number),
    );
    // Already at the first token.
    assert!(!stream.prev());
}

#[test]
fn test_advance_and_rollback_clamp() {
    let source = Source::new("calc.test", "1+2");
    let mut diagnostics = Diagnostics::new();
    let mut stream = TokenStream::new(&source, CalcLexer::default(), &mut diagnostics);

    // Number, Plus, Number, then the terminal stops the walk.
    assert_eq!(stream.advance(10, &mut diagnostics), 3);
    assert!(stream.is_eof());
    assert_eq!(stream.rollback(10), 3);
    assert_eq!(
        stream.current().map(|token| token.kind),
        Ok(CalcKind::Number),
    );
}

#[test]
fn test_recovers_after_unknown_character() {
    let (slots, diagnostics) = lex_all("1 @ 2");

    let kinds: Vec<Result<CalcKind, _>> = slots
        .iter()
        .map(|slot| slot.as_ref().map(|token| token.kind).map_err(|&e| e))
        .collect();
    assert_eq!(kinds[0], Ok(CalcKind::Number));
    assert!(kinds[1].is_err());
    assert_eq!(kinds[2], Ok(CalcKind::Number));
    assert_eq!(kinds[3], Ok(CalcKind::Eof));

    assert!(diagnostics.is_err());
    assert_eq!(diagnostics.len(), 1);
    let report = diagnostics.to_string();
    assert!(report.contains("unknown character \"@\""));
}

#[test]
fn test_unicode_identifiers() {
    let (tokens, diagnostics) = lex_tokens("café + 渋谷");
    assert!(diagnostics.is_ok());

    let summary: Vec<(CalcKind, &str)> = tokens
        .iter()
        .map(|token| (token.kind, token.span.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (CalcKind::Ident, "café"),
            (CalcKind::Plus, "+"),
            (CalcKind::Ident, "渋谷"),
            (CalcKind::Eof, ""),
        ],
    );
}
