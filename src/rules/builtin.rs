// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::ConventionalHeader;

use super::ruleset::RuleSet;
use super::violation::{Violation, ViolationKind};

/// A check applied to a header that matched the grammar.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the header and return a violation if it fails.
    fn check(&self, header: &ConventionalHeader<'_>, rules: &RuleSet) -> Option<Violation>;

    /// Get the rule name.
    fn name(&self) -> &'static str;
}

/// Built-in rules in evaluation order.
pub static BUILTIN_RULES: &[&dyn Rule] = &[
    &TypeAllowed,
    &ScopeRule,
    &SubjectCase,
    &SubjectLength,
    &SubjectPunctuation,
    &HeaderLength,
];

/// Violation for a header that does not follow the grammar.
pub fn format_violation(header: &str) -> Violation {
    let message = if header.trim().is_empty() {
        "header is empty".to_string()
    } else {
        format!("header '{}' does not match 'type(scope)!: subject'", header)
    };

    Violation::new(ViolationKind::Format, message)
        .with_suggestion("Use the form type(scope): subject, e.g. 'feat(api): add endpoint'")
}

/// The type must be one of the allowed types.
#[derive(Debug)]
pub struct TypeAllowed;

impl Rule for TypeAllowed {
    fn check(&self, header: &ConventionalHeader<'_>, rules: &RuleSet) -> Option<Violation> {
        if rules.allows_type(header.commit_type) {
            return None;
        }

        let allowed = rules.allowed_types().join(", ");
        Some(
            Violation::new(
                ViolationKind::Type,
                format!(
                    "type '{}' is not one of the allowed types: {}",
                    header.commit_type, allowed
                ),
            )
            .with_suggestion(format!("Use one of: {}", allowed)),
        )
    }

    fn name(&self) -> &'static str {
        "type-allowed"
    }
}

/// Scope presence (when required) and casing.
///
/// `()` counts as absent for the requirement but passes the casing check.
#[derive(Debug)]
pub struct ScopeRule;

impl Rule for ScopeRule {
    fn check(&self, header: &ConventionalHeader<'_>, rules: &RuleSet) -> Option<Violation> {
        match header.scope {
            Some(scope) if scope != scope.to_lowercase() => Some(
                Violation::new(
                    ViolationKind::Scope,
                    format!("scope must be lowercase (found '{}')", scope),
                )
                .with_suggestion(format!("Use '{}'", scope.to_lowercase())),
            ),
            Some(scope) if !scope.is_empty() => None,
            _ if rules.require_scope() => Some(
                Violation::new(ViolationKind::Scope, "scope is required but not provided")
                    .with_suggestion("Add a scope in parentheses: type(scope): subject"),
            ),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "scope"
    }
}

/// The subject must not start with an uppercase letter.
#[derive(Debug)]
pub struct SubjectCase;

impl Rule for SubjectCase {
    fn check(&self, header: &ConventionalHeader<'_>, _rules: &RuleSet) -> Option<Violation> {
        let first = header.subject.chars().next()?;

        if first.is_uppercase() {
            Some(
                Violation::new(
                    ViolationKind::SubjectCase,
                    "subject must not start with an uppercase letter",
                )
                .with_suggestion("Start the subject with a lowercase letter"),
            )
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "subject-case"
    }
}

/// Subject length in characters, trailing periods excluded.
pub fn subject_length(subject: &str) -> usize {
    subject.trim_end_matches('.').trim().chars().count()
}

/// The subject length must be within the configured bounds.
#[derive(Debug)]
pub struct SubjectLength;

impl Rule for SubjectLength {
    fn check(&self, header: &ConventionalHeader<'_>, rules: &RuleSet) -> Option<Violation> {
        let len = subject_length(header.subject);
        let (min, max) = (rules.min_subject_length(), rules.max_subject_length());

        if len < min {
            Some(
                Violation::new(
                    ViolationKind::SubjectLengthMin,
                    format!("subject is too short: {} characters (min: {})", len, min),
                )
                .with_suggestion("Add more detail to the subject"),
            )
        } else if len > max {
            Some(
                Violation::new(
                    ViolationKind::SubjectLengthMax,
                    format!("subject is too long: {} characters (max: {})", len, max),
                )
                .with_suggestion(format!(
                    "Shorten the subject to {} characters or less",
                    max
                )),
            )
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "subject-length"
    }
}

/// The subject must not end with a period.
#[derive(Debug)]
pub struct SubjectPunctuation;

impl Rule for SubjectPunctuation {
    fn check(&self, header: &ConventionalHeader<'_>, _rules: &RuleSet) -> Option<Violation> {
        if header.subject.ends_with('.') {
            Some(
                Violation::new(
                    ViolationKind::SubjectPunctuation,
                    "subject must not end with a period",
                )
                .with_suggestion("Remove the trailing period"),
            )
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "subject-punctuation"
    }
}

/// The whole header must fit the header length limit.
#[derive(Debug)]
pub struct HeaderLength;

impl Rule for HeaderLength {
    fn check(&self, header: &ConventionalHeader<'_>, rules: &RuleSet) -> Option<Violation> {
        let len = header.header.chars().count();
        let max = rules.max_header_length();

        if len > max {
            Some(Violation::new(
                ViolationKind::HeaderLength,
                format!("header is too long: {} characters (max: {})", len, max),
            ))
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "header-length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(subject: &str) -> ConventionalHeader<'_> {
        ConventionalHeader {
            header: subject,
            commit_type: "feat",
            scope: None,
            breaking: false,
            subject,
        }
    }

    #[test]
    fn test_rule_order_and_names() {
        let names: Vec<&str> = BUILTIN_RULES.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "type-allowed",
                "scope",
                "subject-case",
                "subject-length",
                "subject-punctuation",
                "header-length"
            ]
        );
    }

    #[test]
    fn test_type_not_allowed_names_set() {
        let rules = RuleSet::builder()
            .allowed_types(["feat", "fix"])
            .build()
            .unwrap();
        let mut h = header("add x");
        h.commit_type = "chore";

        let v = TypeAllowed.check(&h, &rules).unwrap();
        assert_eq!(v.kind, ViolationKind::Type);
        assert!(v.message.contains("feat, fix"));
    }

    #[test]
    fn test_scope_lowercase() {
        let rules = RuleSet::default();
        let mut h = header("add x");
        h.scope = Some("Auth");
        let v = ScopeRule.check(&h, &rules).unwrap();
        assert!(v.message.contains("lowercase"));

        h.scope = Some("auth");
        assert!(ScopeRule.check(&h, &rules).is_none());
    }

    #[test]
    fn test_empty_scope_counts_as_absent_when_required() {
        let rules = RuleSet::builder().require_scope(true).build().unwrap();
        let mut h = header("add x");
        h.scope = Some("");
        assert!(ScopeRule.check(&h, &rules).is_some());

        let optional = RuleSet::default();
        assert!(ScopeRule.check(&h, &optional).is_none());
    }

    #[test]
    fn test_subject_case() {
        let rules = RuleSet::default();
        assert!(SubjectCase.check(&header("Add feature"), &rules).is_some());
        assert!(SubjectCase.check(&header("Émettre event"), &rules).is_some());
        assert!(SubjectCase.check(&header("add feature"), &rules).is_none());
        assert!(SubjectCase.check(&header("2fa support"), &rules).is_none());
        assert!(SubjectCase.check(&header("`cfg` flag"), &rules).is_none());
        assert!(SubjectCase.check(&header(""), &rules).is_none());
    }

    #[test]
    fn test_subject_length_measure() {
        assert_eq!(subject_length("ok"), 2);
        assert_eq!(subject_length("add user authentication..."), 23);
        assert_eq!(subject_length("   "), 0);
        assert_eq!(subject_length("ajouté"), 6);
    }

    #[test]
    fn test_subject_length_bounds() {
        let rules = RuleSet::builder()
            .min_subject_length(3)
            .max_subject_length(10)
            .build()
            .unwrap();

        let short = SubjectLength.check(&header("ok"), &rules).unwrap();
        assert_eq!(short.kind, ViolationKind::SubjectLengthMin);
        assert!(short.message.contains('2'));
        assert!(short.message.contains('3'));

        let long = SubjectLength
            .check(&header("a much longer subject"), &rules)
            .unwrap();
        assert_eq!(long.kind, ViolationKind::SubjectLengthMax);
        assert!(long.message.contains("21"));

        assert!(SubjectLength.check(&header("add x"), &rules).is_none());
    }

    #[test]
    fn test_trailing_period() {
        let rules = RuleSet::default();
        assert!(SubjectPunctuation
            .check(&header("add feature."), &rules)
            .is_some());
        assert!(SubjectPunctuation
            .check(&header("add feature!"), &rules)
            .is_none());
    }

    #[test]
    fn test_header_length() {
        let rules = RuleSet::default();
        let long = "a".repeat(151);
        assert!(HeaderLength.check(&header(&long), &rules).is_some());
        let exact = "a".repeat(150);
        assert!(HeaderLength.check(&header(&exact), &rules).is_none());
    }

    #[test]
    fn test_format_violation_message() {
        assert!(format_violation("").message.contains("empty"));
        assert!(format_violation("Update readme")
            .message
            .contains("Update readme"));
    }
}
