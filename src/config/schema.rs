// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from ccv.toml.

use crate::batch::BatchOptions;
use crate::error::Result;
use crate::rules::{
    RuleSet, DEFAULT_MAX_SUBJECT_LENGTH, DEFAULT_MIN_SUBJECT_LENGTH, DEFAULT_TYPES,
};
use serde::{Deserialize, Serialize};

/// The main configuration structure for ccv.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CcvConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Which inputs are checked and how failures are treated.
    pub checks: ChecksConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl CcvConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Batch options derived from the check settings.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            validate_title: self.checks.validate_title,
            validate_commits: self.checks.validate_commits,
        }
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed commit types.
    pub allowed_types: Vec<String>,

    /// Whether scope is required.
    pub require_scope: bool,

    /// Minimum length of the subject.
    pub min_subject_length: usize,

    /// Maximum length of the subject.
    pub max_subject_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            require_scope: false,
            min_subject_length: DEFAULT_MIN_SUBJECT_LENGTH,
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
        }
    }
}

impl RulesConfig {
    /// Validate into an immutable rule set.
    pub fn to_rule_set(&self) -> Result<RuleSet> {
        RuleSet::builder()
            .allowed_types(self.allowed_types.iter().cloned())
            .require_scope(self.require_scope)
            .min_subject_length(self.min_subject_length)
            .max_subject_length(self.max_subject_length)
            .build()
    }
}

/// Check selection and failure policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChecksConfig {
    /// Validate the pull request title.
    pub validate_title: bool,

    /// Validate commit messages.
    pub validate_commits: bool,

    /// Exit non-zero when validation fails.
    pub fail_on_error: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            validate_title: true,
            validate_commits: true,
            fail_on_error: true,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
