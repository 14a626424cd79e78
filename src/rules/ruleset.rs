// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The immutable rule set threaded through evaluation.

use crate::error::{ConfigError, Result};

/// Commit types accepted when none are configured explicitly.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Default minimum subject length.
pub const DEFAULT_MIN_SUBJECT_LENGTH: usize = 3;

/// Default maximum subject length.
pub const DEFAULT_MAX_SUBJECT_LENGTH: usize = 100;

/// Maximum length of the whole header line.
pub const MAX_HEADER_LENGTH: usize = 150;

/// Validated rule configuration.
///
/// Only obtainable through [`RuleSetBuilder::build`] or [`Default`], so the
/// allowed type list is never empty and `1 <= min <= max` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    allowed_types: Vec<String>,
    require_scope: bool,
    min_subject_length: usize,
    max_subject_length: usize,
    max_header_length: usize,
}

impl RuleSet {
    /// Start building a rule set from the defaults.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Allowed commit types, lowercase and deduplicated, in configured order.
    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }

    /// Whether `type` is an allowed type (case-sensitive).
    pub fn allows_type(&self, commit_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == commit_type)
    }

    /// Whether every message needs a non-empty scope.
    pub fn require_scope(&self) -> bool {
        self.require_scope
    }

    /// Minimum subject length in characters.
    pub fn min_subject_length(&self) -> usize {
        self.min_subject_length
    }

    /// Maximum subject length in characters.
    pub fn max_subject_length(&self) -> usize {
        self.max_subject_length
    }

    /// Maximum header length in characters.
    pub fn max_header_length(&self) -> usize {
        self.max_header_length
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            require_scope: false,
            min_subject_length: DEFAULT_MIN_SUBJECT_LENGTH,
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
            max_header_length: MAX_HEADER_LENGTH,
        }
    }
}

/// Builder for [`RuleSet`].
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    allowed_types: Vec<String>,
    require_scope: bool,
    min_subject_length: usize,
    max_subject_length: usize,
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            require_scope: false,
            min_subject_length: DEFAULT_MIN_SUBJECT_LENGTH,
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
        }
    }
}

impl RuleSetBuilder {
    /// Replace the allowed types.
    pub fn allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether a scope is required.
    pub fn require_scope(mut self, require: bool) -> Self {
        self.require_scope = require;
        self
    }

    /// Set the minimum subject length.
    pub fn min_subject_length(mut self, min: usize) -> Self {
        self.min_subject_length = min;
        self
    }

    /// Set the maximum subject length.
    pub fn max_subject_length(mut self, max: usize) -> Self {
        self.max_subject_length = max;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<RuleSet> {
        let mut allowed_types: Vec<String> = Vec::new();
        for t in self.allowed_types {
            let t = t.trim().to_lowercase();
            if !t.is_empty() && !allowed_types.contains(&t) {
                allowed_types.push(t);
            }
        }

        if allowed_types.is_empty() {
            return Err(ConfigError::EmptyAllowedTypes.into());
        }

        if self.min_subject_length == 0 || self.min_subject_length > self.max_subject_length {
            return Err(ConfigError::InvalidSubjectBounds {
                min: self.min_subject_length,
                max: self.max_subject_length,
            }
            .into());
        }

        Ok(RuleSet {
            allowed_types,
            require_scope: self.require_scope,
            min_subject_length: self.min_subject_length,
            max_subject_length: self.max_subject_length,
            max_header_length: MAX_HEADER_LENGTH,
        })
    }
}
