/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:      lexer/token.rs
 * Purpose:   Defines the closed set of token kinds and the token value that
 *            flows from the scanner into the recognizer.
 *
 * Author:    Sam Wilcox
 *
 * License:
 * This file is part of the Stencil template toolchain.
 *
 * Stencil is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The **category of a lexical token** in a Stencil template.
///
/// The recognizer makes every grammar decision by comparing kinds, never
/// text, so this set is closed: a scanner that meets something it cannot
/// classify reports it as [`TokenKind::Unknown`] and lets the grammar reject
/// it at the point where a real token was expected.
///
/// # Pipeline Role
/// ```text
/// Template Source → Scanner → TokenKind → Parser → accept / reject
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `<` (tag opener and relational less-than)
    LessThan,
    /// `>` (tag closer and relational greater-than)
    GreaterThan,
    /// `/` (closing-tag marker and division)
    Slash,

    /// A user-defined name such as a tag name or a template variable.
    Identifier,

    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `%`
    Percentage,
    /// `-` (foreach opener and subtraction)
    Hyphen,

    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `+`
    Plus,
    /// `*`
    Asterisk,
    /// `(`
    LeftParens,
    /// `)`
    RightParens,
    /// `,`
    Comma,

    /// Integer literal, e.g. `42`.
    IntConstant,
    /// Decimal literal, e.g. `3.14`.
    FloatConstant,
    /// Quoted string literal. The token text holds the contents without quotes.
    StringConstant,

    IfKeyword,
    EndIfKeyword,
    ForEachKeyword,
    EndForEachKeyword,
    InKeyword,

    // Type names, reserved for the declaration grammar.
    IntKeyword,
    FloatKeyword,
    StringKeyword,
    IntListKeyword,
    FloatListKeyword,
    StringListKeyword,

    /// A character or malformed lexeme the scanner could not classify.
    Unknown,

    /// End-of-input marker.
    ///
    /// Scanners keep returning this once the source is exhausted, so the
    /// grammar can meet it wherever a concrete token was expected.
    Eof,
}

impl TokenKind {
    /// The fixed source spelling of this kind, if it has one.
    ///
    /// Literals, identifiers, `Unknown` and `Eof` have no fixed spelling.
    pub fn symbol(self) -> Option<&'static str> {
        use TokenKind::*;

        let text = match self {
            OpenBracket => "[",
            CloseBracket => "]",
            LessThan => "<",
            GreaterThan => ">",
            Slash => "/",
            OpenBrace => "{",
            CloseBrace => "}",
            Percentage => "%",
            Hyphen => "-",
            Equal => "==",
            NotEqual => "!=",
            Plus => "+",
            Asterisk => "*",
            LeftParens => "(",
            RightParens => ")",
            Comma => ",",
            IfKeyword => "if",
            EndIfKeyword => "endif",
            ForEachKeyword => "foreach",
            EndForEachKeyword => "endforeach",
            InKeyword => "in",
            IntKeyword => "int",
            FloatKeyword => "float",
            StringKeyword => "string",
            IntListKeyword => "intlist",
            FloatListKeyword => "floatlist",
            StringListKeyword => "stringlist",
            Identifier | IntConstant | FloatConstant | StringConstant | Unknown | Eof => {
                return None
            }
        };

        Some(text)
    }

    /// True for the kinds whose tokens carry their source text.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntConstant
                | TokenKind::FloatConstant
                | TokenKind::StringConstant
                | TokenKind::Unknown
        )
    }

    /// True for the six type-name keywords.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::IntKeyword
                | TokenKind::FloatKeyword
                | TokenKind::StringKeyword
                | TokenKind::IntListKeyword
                | TokenKind::FloatListKeyword
                | TokenKind::StringListKeyword
        )
    }
}

impl fmt::Display for TokenKind {
    /// Prints the variant name (`CloseBrace`), which is what syntax errors
    /// name as the expected and found kinds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A **single classified token** handed from the scanner to the parser.
///
/// # Example Tokens
/// ```text
/// <       →  { kind: LessThan,    text: None,        span: 1:1 }
/// div     →  { kind: Identifier,  text: Some("div"), span: 1:2 }
/// 42      →  { kind: IntConstant, text: Some("42"),  span: 3:7 }
/// ```
///
/// Tokens are immutable once produced; the parser only ever inspects the
/// kind and, for diagnostics, the span and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,

    /// Present for identifiers, literals and `Unknown`; `None` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    /// A token without text (punctuation, keywords, `Eof`).
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            text: None,
            span,
        }
    }

    /// A token carrying its lexeme.
    pub fn with_text(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, span)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The text of the token, or an empty string when it carries none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: what the author wrote
    /// where that is known, the fixed spelling otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.text, self.kind.symbol()) {
            (Some(text), _) => write!(f, "{}", text),
            (None, Some(symbol)) => write!(f, "{}", symbol),
            (None, None) if self.is_eof() => write!(f, "end of input"),
            (None, None) => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_text_then_symbol() {
        let ident = Token::with_text(TokenKind::Identifier, "items", Span::new(1, 4));
        let brace = Token::new(TokenKind::OpenBrace, Span::new(1, 1));
        let eof = Token::eof(Span::new(2, 1));

        assert_eq!(ident.to_string(), "items");
        assert_eq!(brace.to_string(), "{");
        assert_eq!(eof.to_string(), "end of input");
    }

    #[test]
    fn kind_display_is_the_variant_name() {
        assert_eq!(TokenKind::CloseBrace.to_string(), "CloseBrace");
        assert_eq!(TokenKind::EndIfKeyword.to_string(), "EndIfKeyword");
    }

    #[test]
    fn type_keywords_are_classified() {
        assert!(TokenKind::IntListKeyword.is_type_keyword());
        assert!(TokenKind::StringKeyword.is_type_keyword());
        assert!(!TokenKind::IfKeyword.is_type_keyword());
        assert!(!TokenKind::Identifier.is_type_keyword());
    }

    #[test]
    fn only_value_kinds_carry_text() {
        assert!(TokenKind::StringConstant.carries_text());
        assert!(!TokenKind::Percentage.carries_text());
        assert!(!TokenKind::Eof.carries_text());
    }
}
