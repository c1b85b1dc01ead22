//! Substitution rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// A substitution `target > replacement / environment`
///
/// The environment marks the target position with `_`, anchors with `^` and
/// `$`, and may carry one category placeholder group: `[C]` (every
/// occurrence takes the same member) or `(C)` (the two occurrences vary
/// independently).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub target: String,
    pub replacement: String,
    pub environment: String,
}

impl Rule {
    pub fn new(
        target: impl Into<String>,
        replacement: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            replacement: replacement.into(),
            environment: environment.into(),
        }
    }

    /// Copy of this rule with a different environment
    pub fn with_environment(&self, environment: String) -> Self {
        Self {
            target: self.target.clone(),
            replacement: self.replacement.clone(),
            environment,
        }
    }

    /// True if the environment has no placeholder left and can be applied
    /// directly
    pub fn is_literal(&self) -> bool {
        !self.environment.contains('[') && !self.environment.contains('(')
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let replacement = if self.replacement.is_empty() {
            "∅"
        } else {
            &self.replacement
        };
        write!(f, "{} > {} / {}", self.target, replacement, self.environment)
    }
}
