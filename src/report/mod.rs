// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report rendering for batch results.

use crate::batch::{BatchResult, Entry};
use console::style;
use std::fmt::Write as _;

/// Rendered batch report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Plain-text summary, one block per entry followed by counts.
    pub summary: String,
    /// Total number of entries.
    pub total: usize,
    /// Entries that count against the verdict and have violations.
    pub failing: usize,
    /// Batch advisories plus entries evaluated for reporting only.
    pub advisories: usize,
    /// The overall verdict.
    pub valid: bool,
}

impl Report {
    /// Styled one-line verdict for terminal output.
    pub fn verdict_line(&self) -> String {
        if self.valid {
            format!(
                "{} {}",
                style("✓").green().bold(),
                style("All checked messages follow Conventional Commits").green()
            )
        } else {
            format!(
                "{} {}",
                style("✗").red().bold(),
                style(format!(
                    "{} of {} messages failed validation",
                    self.failing, self.total
                ))
                .red()
            )
        }
    }
}

/// Render a batch result as plain text.
pub fn render(result: &BatchResult) -> Report {
    let mut summary = String::new();

    for entry in result.entries() {
        render_entry(&mut summary, entry);
    }

    if !result.advisories().is_empty() {
        if !summary.is_empty() {
            summary.push('\n');
        }
        summary.push_str("Advisories:\n");
        for advisory in result.advisories() {
            let _ = writeln!(summary, "  - {}", advisory);
        }
    }

    let total = result.entries().len();
    let failing = result.failing_count();
    let advisories = result.advisories().len() + result.advisory_entry_count();
    let valid = result.overall_valid();

    if !summary.is_empty() {
        summary.push('\n');
    }
    let _ = writeln!(
        summary,
        "{} checked, {} failing, {} advisory",
        total, failing, advisories
    );
    let _ = writeln!(summary, "Result: {}", if valid { "PASSED" } else { "FAILED" });

    Report {
        summary,
        total,
        failing,
        advisories,
        valid,
    }
}

fn render_entry(out: &mut String, entry: &Entry) {
    let header = match entry.message.header() {
        "" => "(empty)",
        h => h,
    };
    let marker = if entry.advisory { " (advisory)" } else { "" };

    let _ = writeln!(out, "{}{}: {}", entry.source, marker, header);
    if entry.is_valid() {
        out.push_str("  OK\n");
    } else {
        for violation in &entry.violations {
            let _ = writeln!(out, "  - {}", violation);
            if let Some(ref suggestion) = violation.suggestion {
                let _ = writeln!(out, "    hint: {}", suggestion);
            }
        }
    }
}

/// Render a batch result as a JSON document.
pub fn render_json(result: &BatchResult) -> serde_json::Value {
    let report = render(result);

    serde_json::json!({
        "valid": report.valid,
        "total": report.total,
        "failing": report.failing,
        "advisories": result.advisories().iter().map(|a| {
            serde_json::json!({
                "code": a.code(),
                "message": a.to_string(),
            })
        }).collect::<Vec<_>>(),
        "entries": result.entries().iter().map(|e| {
            serde_json::json!({
                "source": e.source.to_string(),
                "header": e.message.header(),
                "type": e.message.commit_type(),
                "scope": e.message.scope(),
                "breaking": e.message.is_breaking(),
                "advisory": e.advisory,
                "valid": e.is_valid(),
                "violations": e.violations,
            })
        }).collect::<Vec<_>>(),
    })
}

/// Map a verdict and the caller's failure policy to a process exit code.
pub fn exit_code(valid: bool, fail_on_error: bool) -> i32 {
    if fail_on_error && !valid {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{validate_batch, BatchOptions, CommitInput};
    use crate::rules::RuleSet;

    fn run(title: Option<&str>, commits: &[&str], options: BatchOptions) -> BatchResult {
        let commits: Vec<CommitInput> = commits.iter().map(|c| CommitInput::from(*c)).collect();
        validate_batch(title, &commits, &RuleSet::default(), options)
    }

    #[test]
    fn test_render_mixed_batch() {
        let result = run(
            Some("feat: add login"),
            &["fix(db): resolve timeout", "Update readme"],
            BatchOptions::default(),
        );
        let report = render(&result);

        assert!(!report.valid);
        assert_eq!(report.total, 3);
        assert_eq!(report.failing, 1);
        assert_eq!(report.advisories, 0);
        assert!(report.summary.contains("PR title: feat: add login\n  OK\n"));
        assert!(report.summary.contains("commit #1: fix(db): resolve timeout\n  OK\n"));
        assert!(report.summary.contains("commit #2: Update readme\n  - [format]"));
        assert!(report.summary.contains("3 checked, 1 failing, 0 advisory"));
        assert!(report.summary.ends_with("Result: FAILED\n"));
    }

    #[test]
    fn test_render_lists_every_violation() {
        let result = run(
            None,
            &["feat: Add feature."],
            BatchOptions {
                validate_title: false,
                validate_commits: true,
            },
        );
        let report = render(&result);
        assert!(report.summary.contains("  - [subject-case]"));
        assert!(report.summary.contains("  - [subject-punctuation]"));
    }

    #[test]
    fn test_render_no_commits_advisory() {
        let result = run(
            None,
            &[],
            BatchOptions {
                validate_title: false,
                validate_commits: true,
            },
        );
        let report = render(&result);

        assert!(report.valid);
        assert_eq!(report.advisories, 1);
        assert!(report.summary.contains("no commits found to validate"));
        assert!(report.summary.ends_with("Result: PASSED\n"));
    }

    #[test]
    fn test_render_advisory_entries() {
        let result = run(
            None,
            &["whatever"],
            BatchOptions {
                validate_title: false,
                validate_commits: false,
            },
        );
        let report = render(&result);
        assert!(report.valid);
        assert_eq!(report.failing, 0);
        assert!(report.summary.contains("commit #1 (advisory): whatever"));
    }

    #[test]
    fn test_render_json() {
        let result = run(Some("feat!: drop v1 api"), &["chore"], BatchOptions::default());
        let json = render_json(&result);

        assert_eq!(json["valid"], false);
        assert_eq!(json["failing"], 1);
        assert_eq!(json["entries"][0]["breaking"], true);
        assert_eq!(json["entries"][1]["violations"][0]["kind"], "format");
    }

    #[test]
    fn test_exit_code_policy() {
        assert_eq!(exit_code(true, true), 0);
        assert_eq!(exit_code(false, true), 1);
        assert_eq!(exit_code(false, false), 0);
    }

    #[test]
    fn test_verdict_line() {
        let report = render(&run(None, &["nope"], BatchOptions::default()));
        assert!(report.verdict_line().contains("1 of 1"));
    }
}
