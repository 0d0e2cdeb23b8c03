/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the reference template scanner.
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

/// Token kinds and token values shared by every scanner.
pub mod token;

/// Reserved word classification.
pub mod keywords;

/// The on-demand reference lexer.
#[allow(clippy::module_inception)]
pub mod lexer;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
