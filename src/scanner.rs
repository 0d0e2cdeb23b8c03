/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     scanner.rs
 * Purpose:  The pull-based token source contract consumed by the parser,
 *           and a scanner over an already-materialized token list.
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

use std::collections::VecDeque;

use crate::lexer::token::Token;
use crate::span::Span;

/// A sequential, single-consumer source of tokens.
///
/// The parser requests exactly one token at a time and never more than one
/// ahead of what it has consumed.
///
/// # Contract
/// - `next_token` never fails.
/// - Once the input is exhausted every further call returns an `Eof` token.
pub trait Scanner {
    fn next_token(&mut self) -> Token;
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<S: Scanner + ?Sized> Scanner for Box<S> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A [`Scanner`] over a pre-built list of tokens.
///
/// Useful when tokens come from somewhere other than the reference lexer:
/// a serialized fixture, an editor's incremental lexer, or a test.
///
/// When the list is drained the stream yields `Eof` positioned at the last
/// token it handed out (1:1 for an empty stream). An `Eof` that is part of
/// the list is returned as-is.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    last_span: Span,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            last_span: Span::default(),
        }
    }

    /// Loads a stream serialized as a JSON array of tokens.
    ///
    /// ```text
    /// [{"kind":"LessThan","span":{"line":1,"column":1}},
    ///  {"kind":"Identifier","text":"p","span":{"line":1,"column":2}}]
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tokens: Vec<Token> = serde_json::from_str(json)?;
        Ok(Self::new(tokens))
    }

    /// Serializes the tokens not yet handed out.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tokens)
    }

    /// Number of tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl Scanner for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) => {
                self.last_span = token.span;
                token
            }
            None => Token::eof(self.last_span),
        }
    }
}
