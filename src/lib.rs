/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Stencil template recognizer.
 *
 * Stencil checks the shape of HTML-embedded templates:
 *
 * ```text
 * <ul>
 *   {-% foreach user in users %}
 *     <li>{{ user }}</li>
 *   {% endforeach %}
 * </ul>
 * ```
 *
 * Tags hold `{{ expr }}` interpolations, `{% if %}` / `{% endif %}` and
 * `{-% foreach x in y %}` / `{% endforeach %}` blocks. The recognizer
 * accepts or rejects a token stream; it does not build a tree, resolve
 * names or render anything.
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

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod semantic;
pub mod span;

pub use config::ParserOptions;
pub use diagnostics::{Diagnostic, DiagnosticPrinter};
pub use error::{ParseError, Result, SemanticError, SyntaxError};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::Parser;
pub use scanner::{Scanner, TokenStream};
pub use semantic::{AcceptAll, SemanticCheck, SemanticValidator};
pub use span::Span;

/// Lexes and recognizes `source` with the default options, accepting every
/// semantic gate.
pub fn recognize(source: &str) -> Result<()> {
    Parser::new(Lexer::new(source)).parse()
}

/// Lexes and recognizes `source` with a caller-supplied validator and
/// options.
pub fn recognize_with<V: SemanticValidator>(
    source: &str,
    validator: V,
    options: ParserOptions,
) -> Result<()> {
    Parser::with_validator(Lexer::new(source), validator)
        .with_options(options)
        .parse()
}
