// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! String inputs from the command line and CI environment.
//!
//! CI systems hand every setting over as a string. These helpers turn them
//! into typed values and layer them over a loaded configuration.

use crate::error::{ConfigError, Result};

use super::schema::CcvConfig;

/// Split a comma-separated type list, trimming and lowercasing entries.
pub fn parse_type_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse a boolean flag such as `true`, `no` or `1`.
pub fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got '{}'", other),
        }
        .into()),
    }
}

/// Parse a non-negative length.
pub fn parse_length(key: &str, value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|e| {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a non-negative integer, got '{}' ({})", value, e),
        }
        .into()
    })
}

/// Raw string overrides, highest precedence.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub allowed_types: Option<String>,
    pub require_scope: Option<String>,
    pub min_subject_length: Option<String>,
    pub max_subject_length: Option<String>,
    pub validate_title: Option<String>,
    pub validate_commits: Option<String>,
    pub fail_on_error: Option<String>,
}

impl ConfigOverrides {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, config: &mut CcvConfig) -> Result<()> {
        if let Some(ref types) = self.allowed_types {
            config.rules.allowed_types = parse_type_list(types);
        }
        if let Some(ref v) = self.require_scope {
            config.rules.require_scope = parse_flag("require_scope", v)?;
        }
        if let Some(ref v) = self.min_subject_length {
            config.rules.min_subject_length = parse_length("min_subject_length", v)?;
        }
        if let Some(ref v) = self.max_subject_length {
            config.rules.max_subject_length = parse_length("max_subject_length", v)?;
        }
        if let Some(ref v) = self.validate_title {
            config.checks.validate_title = parse_flag("validate_title", v)?;
        }
        if let Some(ref v) = self.validate_commits {
            config.checks.validate_commits = parse_flag("validate_commits", v)?;
        }
        if let Some(ref v) = self.fail_on_error {
            config.checks.fail_on_error = parse_flag("fail_on_error", v)?;
        }
        Ok(())
    }
}
