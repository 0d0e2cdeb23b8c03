/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Template, tag and directive-statement grammar.
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

use crate::error::{Result, SyntaxError};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::scanner::Scanner;
use crate::semantic::SemanticValidator;

impl<S: Scanner, V: SemanticValidator> Parser<S, V> {
    /// template → tag inner_template
    ///
    /// A template is one or more sibling tags. Templates nest only through
    /// the bodies of `if` and `foreach`, so this is the depth-counted entry.
    pub(crate) fn template(&mut self) -> Result<()> {
        self.nested(|p| {
            p.tag()?;
            p.inner_template()
        })
    }

    /// inner_template → ( tag )*   while the lookahead is `<`
    ///
    /// Each further template would itself be a tag followed by another
    /// inner template, so the repetition is a loop over tags rather than
    /// self-recursion. It stops at the first token that cannot open a tag.
    pub(crate) fn inner_template(&mut self) -> Result<()> {
        while self.check(TokenKind::LessThan) {
            self.tag()?;
        }

        Ok(())
    }

    /// tag → '<' Identifier '>' stmts '<' '/' Identifier '>'
    ///
    /// The closing identifier is not compared with the opening one unless
    /// `strict_tag_names` is set: `<a></b>` is a valid tag.
    pub(crate) fn tag(&mut self) -> Result<()> {
        self.match_token(TokenKind::LessThan)?;
        let open = self.match_identifier()?;
        self.match_token(TokenKind::GreaterThan)?;
        trace!("tag <{}> at {}", open, open.span);

        self.stmts()?;

        self.match_token(TokenKind::LessThan)?;
        self.match_token(TokenKind::Slash)?;
        let close = self.match_identifier()?;

        if self.options.strict_tag_names && open.text() != close.text() {
            return Err(SyntaxError::MismatchedTag {
                open: open.text().to_string(),
                close: close.text().to_string(),
                span: close.span,
            }
            .into());
        }

        self.match_token(TokenKind::GreaterThan)?;
        Ok(())
    }

    /// stmts → stmt stmts | ε
    fn stmts(&mut self) -> Result<()> {
        while self.check(TokenKind::OpenBrace) {
            self.stmt()?;
        }

        Ok(())
    }

    /// stmt → '{' ( '{' eq '}' '}' | if_stmt | foreach_stmt )
    ///
    /// The token after the first brace picks the statement:
    /// - `{{ expr }}`     interpolation
    /// - `{% if ... %}`   conditional
    /// - `{-% foreach %}` loop
    fn stmt(&mut self) -> Result<()> {
        self.match_token(TokenKind::OpenBrace)?;

        match self.lookahead.kind {
            TokenKind::OpenBrace => {
                self.match_token(TokenKind::OpenBrace)?;
                self.eq()?;
                self.match_token(TokenKind::CloseBrace)?;
                self.match_token(TokenKind::CloseBrace)?;
                Ok(())
            }
            TokenKind::Percentage => self.if_stmt(),
            TokenKind::Hyphen => self.foreach_stmt(),
            _ => Err(SyntaxError::UnrecognizedStatement.into()),
        }
    }

    /// if_stmt → '%' 'if' eq '%' '}' template '{' '%' 'endif' '%' '}'
    fn if_stmt(&mut self) -> Result<()> {
        trace!("if statement at {}", self.lookahead.span);

        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::IfKeyword)?;
        self.eq()?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::CloseBrace)?;

        self.template()?;

        self.match_token(TokenKind::OpenBrace)?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::EndIfKeyword)?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::CloseBrace)?;
        Ok(())
    }

    /// foreach_stmt → '-' '%' 'foreach' Identifier 'in' Identifier '%' '}'
    ///                template '{' '%' 'endforeach' '%' '}'
    fn foreach_stmt(&mut self) -> Result<()> {
        trace!("foreach statement at {}", self.lookahead.span);

        self.match_token(TokenKind::Hyphen)?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::ForEachKeyword)?;
        self.match_token(TokenKind::Identifier)?;
        self.match_token(TokenKind::InKeyword)?;
        self.match_token(TokenKind::Identifier)?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::CloseBrace)?;

        self.template()?;

        self.match_token(TokenKind::OpenBrace)?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::EndForEachKeyword)?;
        self.match_token(TokenKind::Percentage)?;
        self.match_token(TokenKind::CloseBrace)?;
        Ok(())
    }
}
