/*
 * ==========================================================================
 * STENCIL - Template directives, recognized.
 * ==========================================================================
 *
 * File:     config.rs
 * Purpose:  Tunables for a single parse.
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

use serde::{Deserialize, Serialize};

/// Default bound on nested template / expression recursion.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling how strict the recognizer is.
///
/// The defaults reproduce the permissive grammar exactly:
/// closing tags may name any identifier and tokens after the root
/// production are ignored. Both checks can be switched on independently.
///
/// Missing fields take their default when loaded from JSON:
/// ```text
/// { "strict_tag_names": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Reject `<a></b>` with a `MismatchedTag` error.
    pub strict_tag_names: bool,

    /// Require the token stream to end right after the root production.
    pub require_end_of_input: bool,

    /// Maximum nesting of templates and parenthesized / list expressions.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict_tag_names: false,
            require_end_of_input: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Both strictness checks enabled.
    pub fn strict() -> Self {
        Self {
            strict_tag_names: true,
            require_end_of_input: true,
            ..Self::default()
        }
    }
}
