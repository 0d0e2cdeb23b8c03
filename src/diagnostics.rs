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

use serde::Serialize;
use std::fmt::Write;

use crate::error::ParseError;

/// Renders human-friendly, compiler-style diagnostics for template errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending template line
/// - Highlights the error column with a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// The output is modeled on `rustc` diagnostics, simplified and readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full text of the template being checked.
    source: String,

    /// Display name of the template (e.g. `index.html`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders `error` to a string.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: syntax error: expected token CloseBrace but found LessThan at line 1, column 13
    ///   --> index.html:1:13
    ///    |
    ///  1 | <p>{{ 1 < 2 < 3 }}</p>
    ///    |             ^
    /// help: insert `}` here
    /// ```
    ///
    /// Errors without a position (an unrecognized statement, a rejected
    /// semantic gate) render the header and help only.
    pub fn render(&self, error: &ParseError) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "error[{}]: {}", error.code(), error);

        if let Some(span) = error.span() {
            // Spans are 1-indexed; saturating_sub keeps a 0 from underflowing.
            let src_line = self
                .source
                .lines()
                .nth(span.line.saturating_sub(1))
                .unwrap_or("");

            let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, span.line, span.column);
            let _ = writeln!(out, "   |");
            let _ = writeln!(out, "{:>3} | {}", span.line, src_line);

            let underline = format!("{}^", " ".repeat(span.column.saturating_sub(1)));
            let _ = writeln!(out, "   | {}", underline);
        } else {
            let _ = writeln!(out, "  --> {}", self.file_name);
        }

        if let Some(help) = error.help() {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }
}

/// A machine-readable diagnostic, for editors and build tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn from_error(error: &ParseError, file: impl Into<String>) -> Self {
        let span = error.span();

        Self {
            code: error.code(),
            message: error.to_string(),
            file: file.into(),
            line: span.map(|s| s.line),
            column: span.map(|s| s.column),
            help: error.help(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SemanticError, SyntaxError};
    use crate::lexer::token::TokenKind;
    use crate::semantic::SemanticCheck;
    use crate::span::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_snippet_with_caret() {
        let source = "<ul>\n  <li>{{ 1 < 2 < 3 }}</li>\n</ul>";
        let error = ParseError::from(SyntaxError::UnexpectedToken {
            expected: TokenKind::CloseBrace,
            found: TokenKind::LessThan,
            span: Span::new(2, 16),
        });

        let rendered = DiagnosticPrinter::new("list.html", source).render(&error);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "error[E_SYNTAX]: syntax error: expected token CloseBrace but found LessThan at line 2, column 16",
                "  --> list.html:2:16",
                "   |",
                "  2 |   <li>{{ 1 < 2 < 3 }}</li>",
                "   |                ^",
                "help: insert `}` here",
            ]
        );
    }

    #[test]
    fn print_writes_without_panicking() {
        let error = ParseError::from(SyntaxError::UnrecognizedStatement);
        DiagnosticPrinter::new("page.html", "<p>{ }</p>").print(&error);
    }

    #[test]
    fn positionless_errors_skip_the_snippet() {
        let error = ParseError::from(SemanticError {
            check: SemanticCheck::Block,
        });

        let rendered = DiagnosticPrinter::new("page.html", "[").render(&error);

        assert_eq!(
            rendered,
            "error[E_SEMANTIC]: semantic error: `block` rejected by the validator\n  --> page.html\n"
        );
    }

    #[test]
    fn diagnostic_serializes_to_json() {
        let error = ParseError::from(SyntaxError::NoRootProduction {
            found: TokenKind::Identifier,
            span: Span::new(1, 1),
        });

        let json = Diagnostic::from_error(&error, "a.html").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["code"], "E_ROOT");
        assert_eq!(value["file"], "a.html");
        assert_eq!(value["line"], 1);
        assert_eq!(value["column"], 1);
        assert!(value["help"].as_str().unwrap().contains('<'));
    }

    #[test]
    fn diagnostic_omits_missing_position() {
        let error = ParseError::from(SyntaxError::UnrecognizedStatement);
        let diagnostic = Diagnostic::from_error(&error, "a.html");

        assert_eq!(diagnostic.line, None);
        assert!(!diagnostic.to_json().unwrap().contains("\"line\""));
    }
}
