/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
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

use thiserror::Error;

use crate::lexer::token::TokenKind;
use crate::semantic::SemanticCheck;
use crate::span::Span;

pub type Result<T> = std::result::Result<T, ParseError>;

/// The single failure a parse can end with.
///
/// Every error is fatal: the first defect met in left-to-right order
/// unwinds the whole parse, so callers see at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Structural defects in the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The lookahead did not have the kind the grammar required.
    #[error(
        "syntax error: expected token {expected} but found {found} at line {}, column {}",
        .span.line,
        .span.column
    )]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// A `{` opened a statement that is neither `{{`, `{%` nor `{-`.
    #[error("syntax error: unrecognized statement")]
    UnrecognizedStatement,

    /// The first token starts neither a block (`[`) nor a template (`<`).
    #[error(
        "syntax error: no applicable root production for {found} at line {}, column {}",
        .span.line,
        .span.column
    )]
    NoRootProduction { found: TokenKind, span: Span },

    /// A closing tag named a different element than its opening tag.
    #[error(
        "syntax error: closing tag `{close}` does not match `{open}` at line {}, column {}",
        .span.line,
        .span.column
    )]
    MismatchedTag {
        open: String,
        close: String,
        span: Span,
    },

    /// Templates or expressions nested deeper than the configured limit.
    #[error(
        "syntax error: nesting deeper than {limit} levels at line {}, column {}",
        .span.line,
        .span.column
    )]
    NestingTooDeep { limit: usize, span: Span },
}

/// A named construct rejected by the semantic validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("semantic error: `{check}` rejected by the validator")]
pub struct SemanticError {
    pub check: SemanticCheck,
}

impl ParseError {
    /// Stable error code used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Syntax(SyntaxError::UnexpectedToken { .. }) => "E_SYNTAX",
            ParseError::Syntax(SyntaxError::UnrecognizedStatement) => "E_STATEMENT",
            ParseError::Syntax(SyntaxError::NoRootProduction { .. }) => "E_ROOT",
            ParseError::Syntax(SyntaxError::MismatchedTag { .. }) => "E_TAG",
            ParseError::Syntax(SyntaxError::NestingTooDeep { .. }) => "E_DEPTH",
            ParseError::Semantic(_) => "E_SEMANTIC",
        }
    }

    /// Where the error was detected, when it has a position.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Syntax(SyntaxError::UnexpectedToken { span, .. })
            | ParseError::Syntax(SyntaxError::NoRootProduction { span, .. })
            | ParseError::Syntax(SyntaxError::MismatchedTag { span, .. })
            | ParseError::Syntax(SyntaxError::NestingTooDeep { span, .. }) => Some(*span),
            ParseError::Syntax(SyntaxError::UnrecognizedStatement) | ParseError::Semantic(_) => {
                None
            }
        }
    }

    /// An optional follow-up hint for the template author.
    pub fn help(&self) -> Option<String> {
        match self {
            ParseError::Syntax(SyntaxError::UnexpectedToken { expected, .. }) => expected
                .symbol()
                .map(|symbol| format!("insert `{}` here", symbol)),
            ParseError::Syntax(SyntaxError::UnrecognizedStatement) => Some(
                "statements start with `{{`, `{%` or `{-%`".to_string(),
            ),
            ParseError::Syntax(SyntaxError::NoRootProduction { .. }) => {
                Some("a template starts with `<` and a block with `[`".to_string())
            }
            ParseError::Syntax(SyntaxError::MismatchedTag { open, .. }) => {
                Some(format!("close the element with `</{}>`", open))
            }
            ParseError::Syntax(SyntaxError::NestingTooDeep { .. }) | ParseError::Semantic(_) => {
                None
            }
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, ParseError::Semantic(_))
    }
}
