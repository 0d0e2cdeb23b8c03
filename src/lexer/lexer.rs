/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     lexer/lexer.rs
 * Purpose:  Reference scanner turning template text into classified tokens,
 *           one token per request.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the Stencil template toolchain.
 *
 * Stencil is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::scanner::Scanner;
use crate::span::Span;

/// Integer or decimal literal. A trailing `.` without digits is not part of
/// the number.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap());

/// Identifier or keyword.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Collects the complete token stream for `source`, terminated by exactly
/// one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

/// The reference Stencil scanner.
///
/// Unlike a batch lexer, tokens are produced lazily: each call to
/// [`Scanner::next_token`] scans exactly one token from the current cursor.
/// The lexer never fails. Characters it cannot classify become
/// [`TokenKind::Unknown`] tokens, and once the input is exhausted it keeps
/// returning `Eof`.
pub struct Lexer<'src> {
    source: &'src str,

    /// Byte offset of the next unread character.
    current: usize,

    line: usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at line 1, column 1 of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans one token starting at the cursor.
    ///
    /// # Behavior
    /// - Numbers and words are classified by regex, so `1.5` is one
    ///   `FloatConstant` and `endif` is one keyword.
    /// - `==` and `!=` are two-character operators; a lone `=` or `!` is
    ///   `Unknown`.
    /// - Quotes open a string literal.
    ///
    /// The caller guarantees the cursor is not at end of input and not on
    /// whitespace.
    fn scan_token(&mut self) -> Token {
        let start = self.span();
        let source = self.source;
        let rest = &source[self.current..];

        if let Some(found) = NUMBER.find(rest) {
            let text = found.as_str();
            let kind = if text.contains('.') {
                TokenKind::FloatConstant
            } else {
                TokenKind::IntConstant
            };
            self.consume(text.len());
            return Token::with_text(kind, text, start);
        }

        if let Some(found) = WORD.find(rest) {
            let text = found.as_str();
            self.consume(text.len());
            return match keyword_kind(text) {
                Some(kind) => Token::new(kind, start),
                None => Token::with_text(TokenKind::Identifier, text, start),
            };
        }

        let Some(ch) = self.advance() else {
            return Token::eof(start);
        };

        let kind = match ch {
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '/' => TokenKind::Slash,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '%' => TokenKind::Percentage,
            '-' => TokenKind::Hyphen,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Asterisk,
            '(' => TokenKind::LeftParens,
            ')' => TokenKind::RightParens,
            ',' => TokenKind::Comma,

            '=' | '!' => {
                if self.match_char('=') {
                    if ch == '=' {
                        TokenKind::Equal
                    } else {
                        TokenKind::NotEqual
                    }
                } else {
                    return Token::with_text(TokenKind::Unknown, ch.to_string(), start);
                }
            }

            '"' | '\'' => return self.string_with_delimiter(ch, start),

            other => return Token::with_text(TokenKind::Unknown, other.to_string(), start),
        };

        Token::new(kind, start)
    }

    /// Scans the body of a string literal whose opening `delimiter` has
    /// already been consumed.
    ///
    /// The token text excludes both quotes. Line breaks inside the literal
    /// are allowed and tracked. An unterminated literal swallows the rest of
    /// the input and is reported as `Unknown` carrying that text, opening
    /// quote included.
    fn string_with_delimiter(&mut self, delimiter: char, start: Span) -> Token {
        let body_start = self.current;

        while self.peek() != Some(delimiter) && !self.is_at_end() {
            self.advance();
        }

        let source = self.source;

        if self.is_at_end() {
            let text = &source[body_start - delimiter.len_utf8()..];
            return Token::with_text(TokenKind::Unknown, text, start);
        }

        let value = &source[body_start..self.current];
        self.advance(); // closing quote

        Token::with_text(TokenKind::StringConstant, value, start)
    }

    /// Skips spaces, tabs, carriage returns and line feeds.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
                break;
            }
            self.advance();
        }
    }

    /// Consumes `expected` if it is the next character.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `len` bytes that a regex has already matched.
    fn consume(&mut self, len: usize) {
        let end = self.current + len;
        while self.current < end && self.advance().is_some() {}
    }

    /// Advances past one character, keeping line and column current.
    ///
    /// At end of input the cursor stays put and `None` is returned.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }
}

impl Scanner for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = if self.is_at_end() {
            Token::eof(self.span())
        } else {
            self.scan_token()
        };

        trace!("scanned {} `{}` at {}", token.kind, token, token.span);
        token
    }
}
