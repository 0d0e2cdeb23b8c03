//! Driving the parser from scanners other than the reference lexer.

mod common;

use pretty_assertions::assert_eq;
use stencil::{
    tokenize, Lexer, Parser, ParserOptions, Scanner, Span, Token, TokenKind, TokenStream,
};

use common::{stream, unexpected};

/// Counts how many tokens the parser pulls.
struct CountingScanner {
    inner: TokenStream,
    pulled: usize,
}

impl Scanner for CountingScanner {
    fn next_token(&mut self) -> Token {
        self.pulled += 1;
        self.inner.next_token()
    }
}

#[test]
fn construction_primes_exactly_one_token() {
    let mut scanner = CountingScanner {
        inner: stream(&[TokenKind::LessThan, TokenKind::Identifier]),
        pulled: 0,
    };

    let parser = Parser::new(&mut scanner);
    assert_eq!(parser.lookahead().kind, TokenKind::LessThan);
    drop(parser);

    assert_eq!(scanner.pulled, 1);
}

#[test]
fn parse_pulls_one_token_past_the_last_match() {
    use TokenKind::*;

    let mut scanner = CountingScanner {
        inner: stream(&[LessThan, Identifier, GreaterThan, LessThan, Slash, Identifier, GreaterThan]),
        pulled: 0,
    };

    Parser::new(&mut scanner).parse().unwrap();

    // Seven tokens plus the Eof that became the final lookahead.
    assert_eq!(scanner.pulled, 8);
}

#[test]
fn boxed_scanners_drive_the_parser() {
    let scanner: Box<dyn Scanner> = Box::new(Lexer::new("<a>{{ 1 + 2 }}</a>"));
    assert_eq!(Parser::new(scanner).parse(), Ok(()));
}

#[test]
fn recognizes_a_json_token_fixture() {
    let json = r#"[
        {"kind":"LessThan","span":{"line":1,"column":1}},
        {"kind":"Identifier","text":"p","span":{"line":1,"column":2}},
        {"kind":"GreaterThan","span":{"line":1,"column":3}},
        {"kind":"OpenBrace","span":{"line":1,"column":4}},
        {"kind":"OpenBrace","span":{"line":1,"column":5}},
        {"kind":"IntConstant","text":"7","span":{"line":1,"column":7}},
        {"kind":"CloseBrace","span":{"line":1,"column":9}},
        {"kind":"CloseBrace","span":{"line":1,"column":10}},
        {"kind":"LessThan","span":{"line":1,"column":11}},
        {"kind":"Slash","span":{"line":1,"column":12}},
        {"kind":"Identifier","text":"p","span":{"line":1,"column":13}},
        {"kind":"GreaterThan","span":{"line":1,"column":14}}
    ]"#;

    let tokens = TokenStream::from_json(json).unwrap();
    assert_eq!(Parser::new(tokens).parse(), Ok(()));
}

#[test]
fn lexer_output_survives_a_json_round_trip() {
    let source = "<ul>{-% foreach a in b %}<li>{{ a * 2 }}</li>{% endforeach %}</ul>";
    let json = TokenStream::new(tokenize(source)).to_json().unwrap();
    let reloaded = TokenStream::from_json(&json).unwrap();

    assert_eq!(Parser::new(reloaded).parse(), Ok(()));
}

#[test]
fn truncated_stream_fails_at_the_last_position() {
    use TokenKind::*;

    let result = Parser::new(stream(&[LessThan, Identifier, GreaterThan])).parse();

    // The drained stream reports Eof where its last token was.
    assert_eq!(unexpected(result), (LessThan, Eof, Span::new(1, 3)));
}

#[test]
fn options_apply_to_hand_built_streams() {
    use TokenKind::*;

    let tokens = stream(&[
        LessThan, Identifier, GreaterThan, LessThan, Slash, Identifier, GreaterThan, Comma,
    ]);

    let result = Parser::new(tokens).with_options(ParserOptions::strict()).parse();

    assert_eq!(unexpected(result), (Eof, Comma, Span::new(1, 8)));
}
