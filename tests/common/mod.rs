//! Shared helpers for building token streams by hand.

#![allow(dead_code)]

use stencil::{ParseError, Span, SyntaxError, Token, TokenKind, TokenStream};

/// Builds a single-line stream from kinds, one column per token.
///
/// Text-carrying kinds get a placeholder lexeme so the stream looks like
/// real scanner output.
pub fn stream(kinds: &[TokenKind]) -> TokenStream {
    TokenStream::new(tokens(kinds))
}

pub fn tokens(kinds: &[TokenKind]) -> Vec<Token> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let span = Span::new(1, i + 1);
            if kind.carries_text() {
                Token::with_text(kind, placeholder(kind), span)
            } else {
                Token::new(kind, span)
            }
        })
        .collect()
}

fn placeholder(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::IntConstant => "1",
        TokenKind::FloatConstant => "1.5",
        TokenKind::StringConstant => "text",
        _ => "x",
    }
}

/// Asserts `result` is an `UnexpectedToken` error and returns its parts.
pub fn unexpected(result: Result<(), ParseError>) -> (TokenKind, TokenKind, Span) {
    match result {
        Err(ParseError::Syntax(SyntaxError::UnexpectedToken {
            expected,
            found,
            span,
        })) => (expected, found, span),
        other => panic!("expected an unexpected-token error, got {:?}", other),
    }
}
