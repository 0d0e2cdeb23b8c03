/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * Core Recursive-Descent Recognizer Entry Point
 *
 * This file defines the `Parser` structure and the root production that
 * decides whether a token stream is a block or a template.
 *
 * The grammar itself is split across multiple modules:
 * - `statements.rs`   → Template / tag / statement grammar
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token matching, lookahead and nesting guard
 *
 * --------------------------------------------------------------------------
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

use log::debug;

use crate::config::ParserOptions;
use crate::error::{Result, SyntaxError};
use crate::lexer::token::{Token, TokenKind};
use crate::scanner::Scanner;
use crate::semantic::{AcceptAll, SemanticCheck, SemanticValidator};

/// The Stencil recursive-descent recognizer.
///
/// This structure maintains:
/// - The scanner it pulls tokens from, one at a time
/// - The semantic validator consulted by the semantic gates
/// - Exactly one token of lookahead
///
/// The grammar is implemented through extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks. The parser
/// only accepts or rejects; it builds no tree.
///
/// # Lifecycle
/// Construction pulls the first token, so every production sees a real
/// lookahead. [`Parser::parse`] consumes the parser: one parser, one parse.
pub struct Parser<S, V = AcceptAll> {
    pub(crate) scanner: S,
    pub(crate) validator: V,
    pub(crate) options: ParserOptions,

    /// The single unconsumed token every grammar decision inspects.
    pub(crate) lookahead: Token,

    /// Current template / expression nesting, checked against
    /// `options.max_depth`.
    pub(crate) depth: usize,
}

impl<S: Scanner> Parser<S, AcceptAll> {
    /// Creates a parser that accepts every semantic gate.
    pub fn new(scanner: S) -> Self {
        Self::with_validator(scanner, AcceptAll)
    }
}

impl<S: Scanner, V: SemanticValidator> Parser<S, V> {
    /// Creates a parser and primes the lookahead with the first token.
    pub fn with_validator(mut scanner: S, validator: V) -> Self {
        let lookahead = scanner.next_token();

        Self {
            scanner,
            validator,
            options: ParserOptions::default(),
            lookahead,
            depth: 0,
        }
    }

    /// Replaces the default options. Does not touch the lookahead.
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// The current, unconsumed token.
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Recognizes the token stream.
    ///
    /// # Returns
    /// - `Ok(())` when the root production completes. Tokens after it are
    ///   not inspected unless `require_end_of_input` is set.
    /// - The first syntax or semantic error met, left to right.
    ///
    /// # Pipeline
    /// ```text
    /// Source → Scanner → Tokens → Parser → accept / reject
    /// ```
    pub fn parse(mut self) -> Result<()> {
        debug!(
            "parse started at {} on {}",
            self.lookahead.span, self.lookahead.kind
        );

        self.program()?;

        if self.options.require_end_of_input {
            self.expect_end()?;
        }

        debug!("parse accepted, stopped at {}", self.lookahead.span);
        Ok(())
    }

    /// program → init | inner_template
    ///
    /// Dispatches on the first token without consuming it: `[` opens a
    /// block, `<` a template. Anything else has no production.
    fn program(&mut self) -> Result<()> {
        match self.lookahead.kind {
            TokenKind::OpenBracket => self.init(),
            TokenKind::LessThan => self.inner_template(),
            found => Err(SyntaxError::NoRootProduction {
                found,
                span: self.lookahead.span,
            }
            .into()),
        }
    }

    /// init → <semantic gate "block">
    fn init(&mut self) -> Result<()> {
        self.semantic_gate(SemanticCheck::Block)
    }
}
