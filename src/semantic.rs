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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The named constructs the grammar hands to a [`SemanticValidator`].
///
/// Each variant is one semantic gate. Only [`SemanticCheck::Block`] is
/// reachable from the root production today; the remaining tags are where
/// the declaration and assignment grammar will hook in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticCheck {
    Block,
    Code,
    Assignations,
    Assignation,
}

impl SemanticCheck {
    /// The string discriminator passed to the validator.
    pub fn tag(self) -> &'static str {
        match self {
            SemanticCheck::Block => "block",
            SemanticCheck::Code => "code",
            SemanticCheck::Assignations => "assignations",
            SemanticCheck::Assignation => "assignation",
        }
    }
}

impl fmt::Display for SemanticCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Decides whether a named construct is semantically acceptable.
///
/// The parser assumes `validate` has no side effects it depends on.
pub trait SemanticValidator {
    fn validate(&self, rule: &str) -> bool;
}

/// Accepts every construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SemanticValidator for AcceptAll {
    fn validate(&self, _rule: &str) -> bool {
        true
    }
}

impl<F> SemanticValidator for F
where
    F: Fn(&str) -> bool,
{
    fn validate(&self, rule: &str) -> bool {
        self(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        assert_eq!(SemanticCheck::Block.tag(), "block");
        assert_eq!(SemanticCheck::Code.tag(), "code");
        assert_eq!(SemanticCheck::Assignations.tag(), "assignations");
        assert_eq!(SemanticCheck::Assignation.to_string(), "assignation");
    }

    #[test]
    fn closures_are_validators() {
        let only_code = |rule: &str| rule == "code";

        assert!(only_code.validate(SemanticCheck::Code.tag()));
        assert!(!only_code.validate(SemanticCheck::Block.tag()));
        assert!(AcceptAll.validate("anything"));
    }
}
