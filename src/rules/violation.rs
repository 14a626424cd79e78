// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation types.

use serde::Serialize;
use std::fmt;

/// Category of a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Header does not follow `type(scope)!: subject`.
    Format,
    /// Type is not in the allowed set.
    Type,
    /// Scope missing or not lowercase.
    Scope,
    /// Subject starts with an uppercase letter.
    SubjectCase,
    /// Subject shorter than the minimum.
    SubjectLengthMin,
    /// Subject longer than the maximum.
    SubjectLengthMax,
    /// Subject ends with a period.
    SubjectPunctuation,
    /// Header longer than the maximum.
    HeaderLength,
}

impl ViolationKind {
    /// Stable code for programmatic handling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Format => "format",
            ViolationKind::Type => "type",
            ViolationKind::Scope => "scope",
            ViolationKind::SubjectCase => "subject-case",
            ViolationKind::SubjectLengthMin => "subject-length-min",
            ViolationKind::SubjectLengthMax => "subject-length-max",
            ViolationKind::SubjectPunctuation => "subject-punctuation",
            ViolationKind::HeaderLength => "header-length",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Human-readable message.
    pub message: String,
    /// Optional hint for fixing the message.
    pub suggestion: Option<String>,
}

impl Violation {
    /// Create a violation without a suggestion.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(ViolationKind::SubjectLengthMin.as_str(), "subject-length-min");
        assert_eq!(ViolationKind::HeaderLength.to_string(), "header-length");
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&ViolationKind::SubjectPunctuation).unwrap();
        assert_eq!(json, "\"subject-punctuation\"");
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::new(ViolationKind::Scope, "scope is required");
        assert_eq!(v.to_string(), "[scope] scope is required");
    }

    #[test]
    fn test_violation_with_suggestion() {
        let v = Violation::new(ViolationKind::Type, "type 'wip' is not allowed")
            .with_suggestion("Use one of: feat, fix");
        assert_eq!(v.suggestion.as_deref(), Some("Use one of: feat, fix"));
        assert_eq!(v.to_string(), "[type] type 'wip' is not allowed");
    }
}
