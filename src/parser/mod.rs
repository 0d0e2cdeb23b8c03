/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Stencil recursive-descent recognizer.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Template and statement grammar
 *   - Expression grammar
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Root dispatch between block and template
#[allow(clippy::module_inception)]
pub mod parser;

/// Template-level grammar:
/// - template / tag
/// - `{{ }}` interpolation, `{% if %}`, `{-% foreach %}`
pub mod statements;

/// Expression-level grammar:
/// - eq → rel → expr → term → factor
/// - parentheses and list literals
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - nesting guard
/// - semantic gates
pub mod helpers;

pub use parser::Parser;
