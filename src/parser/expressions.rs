/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Implements the directive expression grammar using recursive
 *           descent.
 *
 * Author:   Sam Wilcox
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Expressions appear inside `{{ ... }}` interpolations and `{% if ... %}`
 * conditions. Parsing order follows precedence, loosest first:
 *
 *   eq → rel → expr → term → factor
 *
 * Each level parses the next-tighter level, then loops on its own
 * operators. This gives:
 *  - Left-associative `+ - * /`
 *  - Chainable `==` / `!=`
 *  - At most ONE `<` / `>` per relational operand (`1 < 2 < 3` is rejected)
 *
 * ==========================================================================
 */

use crate::error::Result;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::scanner::Scanner;
use crate::semantic::SemanticValidator;

impl<S: Scanner, V: SemanticValidator> Parser<S, V> {
    /// eq → rel ( ( "==" | "!=" ) rel )*
    pub(crate) fn eq(&mut self) -> Result<()> {
        self.rel()?;

        while self.check(TokenKind::Equal) || self.check(TokenKind::NotEqual) {
            self.advance();
            self.rel()?;
        }

        Ok(())
    }

    /// rel → expr ( ( "<" | ">" ) expr )?
    fn rel(&mut self) -> Result<()> {
        self.expr()?;

        if self.check(TokenKind::LessThan) || self.check(TokenKind::GreaterThan) {
            self.advance();
            self.expr()?;
        }

        Ok(())
    }

    /// expr → term ( ( "+" | "-" ) term )*
    fn expr(&mut self) -> Result<()> {
        self.term()?;

        while self.check(TokenKind::Plus) || self.check(TokenKind::Hyphen) {
            self.advance();
            self.term()?;
        }

        Ok(())
    }

    /// term → factor ( ( "*" | "/" ) factor )*
    fn term(&mut self) -> Result<()> {
        self.factor()?;

        while self.check(TokenKind::Asterisk) || self.check(TokenKind::Slash) {
            self.advance();
            self.factor()?;
        }

        Ok(())
    }

    /// factor → "(" eq ")"
    ///        | IntConstant | FloatConstant | StringConstant
    ///        | "[" expr_list "]"
    ///        | Identifier
    ///
    /// Anything not listed falls through to matching an identifier, so a
    /// stray operator or closing delimiter is reported as
    /// "expected Identifier" at its own position.
    fn factor(&mut self) -> Result<()> {
        match self.lookahead.kind {
            TokenKind::LeftParens => self.nested(|p| {
                p.match_token(TokenKind::LeftParens)?;
                p.eq()?;
                p.match_token(TokenKind::RightParens)?;
                Ok(())
            }),

            kind @ (TokenKind::IntConstant
            | TokenKind::FloatConstant
            | TokenKind::StringConstant) => {
                self.match_token(kind)?;
                Ok(())
            }

            TokenKind::OpenBracket => self.nested(|p| {
                p.match_token(TokenKind::OpenBracket)?;
                p.expr_list()?;
                p.match_token(TokenKind::CloseBracket)?;
                Ok(())
            }),

            _ => {
                self.match_token(TokenKind::Identifier)?;
                Ok(())
            }
        }
    }

    /// expr_list → eq ( "," expr_list )?
    ///
    /// A comma always demands another element, so `[1, 2,]` fails at `]`.
    fn expr_list(&mut self) -> Result<()> {
        self.eq()?;

        while self.check(TokenKind::Comma) {
            self.match_token(TokenKind::Comma)?;
            self.eq()?;
        }

        Ok(())
    }
}
