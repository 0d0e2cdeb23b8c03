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

use crate::lexer::token::TokenKind;

/// Classifies a scanned word as a **reserved keyword**, if it is one.
///
/// Used by the lexer after it has matched an identifier-shaped lexeme, to
/// decide between a keyword kind and [`TokenKind::Identifier`].
///
/// # Examples
/// ```text
/// foreach   -> Some(ForEachKeyword)
/// endif     -> Some(EndIfKeyword)
/// intlist   -> Some(IntListKeyword)
/// user      -> None
/// If        -> None   (case-sensitive)
/// ```
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "if" => TokenKind::IfKeyword,
        "endif" => TokenKind::EndIfKeyword,
        "foreach" => TokenKind::ForEachKeyword,
        "endforeach" => TokenKind::EndForEachKeyword,
        "in" => TokenKind::InKeyword,
        "int" => TokenKind::IntKeyword,
        "float" => TokenKind::FloatKeyword,
        "string" => TokenKind::StringKeyword,
        "intlist" => TokenKind::IntListKeyword,
        "floatlist" => TokenKind::FloatListKeyword,
        "stringlist" => TokenKind::StringListKeyword,
        _ => return None,
    };

    Some(kind)
}

/// Returns `true` if `word` is reserved.
pub fn is_keyword(word: &str) -> bool {
    keyword_kind(word).is_some()
}
