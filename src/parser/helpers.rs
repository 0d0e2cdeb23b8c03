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

use std::mem;

use log::{debug, trace};

use crate::error::{ParseError, Result, SemanticError, SyntaxError};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::scanner::Scanner;
use crate::semantic::{SemanticCheck, SemanticValidator};

impl<S: Scanner, V: SemanticValidator> Parser<S, V> {
    /// Pulls the next token from the scanner and returns the one it replaces.
    ///
    /// # Critical Invariant
    /// This is the only place the scanner is asked for a token after
    /// construction, and it asks for **exactly one**.
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        trace!("advance: {} at {}", next.kind, next.span);
        mem::replace(&mut self.lookahead, next)
    }

    /// Checks the lookahead kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Consumes the lookahead if it has the `expected` kind.
    ///
    /// This is the token-matching primitive every production is built on.
    /// On a mismatch nothing is consumed and the error names the expected
    /// kind, the kind actually found and where it was found.
    ///
    /// The matched token is dropped here so recursive productions keep
    /// small frames; `match_identifier` returns it when the text
    /// is needed.
    pub(crate) fn match_token(&mut self, expected: TokenKind) -> Result<()> {
        if self.lookahead.kind != expected {
            return Err(self.unexpected(expected));
        }

        self.advance();
        Ok(())
    }

    /// Consumes an `Identifier` and hands it back for its text and span.
    pub(crate) fn match_identifier(&mut self) -> Result<Token> {
        if self.lookahead.kind != TokenKind::Identifier {
            return Err(self.unexpected(TokenKind::Identifier));
        }

        Ok(self.advance())
    }

    fn unexpected(&self, expected: TokenKind) -> ParseError {
        SyntaxError::UnexpectedToken {
            expected,
            found: self.lookahead.kind,
            span: self.lookahead.span,
        }
        .into()
    }

    /// Fails unless the stream is exhausted. Never advances.
    pub(crate) fn expect_end(&self) -> Result<()> {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected(TokenKind::Eof))
        }
    }

    /// Runs `production` one nesting level deeper.
    ///
    /// Every self-embedding production (templates inside control blocks,
    /// parenthesized and list expressions) goes through here, so hostile
    /// input fails with `NestingTooDeep` instead of exhausting the stack.
    pub(crate) fn nested<F>(&mut self, production: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.depth >= self.options.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.options.max_depth,
                span: self.lookahead.span,
            }
            .into());
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;

        result
    }

    /// Asks the validator about a named construct. Consumes no tokens.
    ///
    /// Each tag of [`SemanticCheck`] is one gate; the grammar reaches
    /// `Block` from the root, the others are where declaration and
    /// assignment rules attach.
    pub(crate) fn semantic_gate(&self, check: SemanticCheck) -> Result<()> {
        let accepted = self.validator.validate(check.tag());
        debug!("semantic gate `{}`: {}", check, if accepted { "accepted" } else { "rejected" });

        if accepted {
            Ok(())
        } else {
            Err(SemanticError { check }.into())
        }
    }
}
