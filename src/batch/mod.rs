// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Batch validation of commit messages and a pull request title.
//!
//! Every input is parsed and evaluated independently; the batch only
//! decides which entries count toward the overall verdict.

use crate::commit::ParsedMessage;
use crate::rules::{evaluate, RuleSet, Violation};
use std::fmt;

/// A commit message with an optional identifier (usually its SHA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInput {
    /// Commit identifier shown in the report.
    pub id: Option<String>,
    /// Raw commit message.
    pub message: String,
}

impl CommitInput {
    /// Create an input with an identifier.
    pub fn with_id(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            message: message.into(),
        }
    }
}

impl From<String> for CommitInput {
    fn from(message: String) -> Self {
        Self { id: None, message }
    }
}

impl From<&str> for CommitInput {
    fn from(message: &str) -> Self {
        Self::from(message.to_string())
    }
}

/// Which input categories decide the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Validate the pull request title.
    pub validate_title: bool,
    /// Validate the commit messages.
    pub validate_commits: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            validate_title: true,
            validate_commits: true,
        }
    }
}

/// Where an entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The pull request title.
    Title,
    /// A commit, by position in the input list and optional SHA.
    Commit { index: usize, id: Option<String> },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Title => f.write_str("PR title"),
            Source::Commit { id: Some(id), .. } => {
                write!(f, "commit {}", id.chars().take(7).collect::<String>())
            }
            Source::Commit { index, id: None } => write!(f, "commit #{}", index + 1),
        }
    }
}

/// Batch-level conditions that are reported but never fail the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Commit validation was enabled but there were no commits.
    NoCommits,
    /// Title validation was enabled but no title was supplied.
    MissingTitle,
}

impl Advisory {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::NoCommits => "no-commits",
            Advisory::MissingTitle => "missing-title",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NoCommits => f.write_str("no commits found to validate"),
            Advisory::MissingTitle => f.write_str("no PR title provided to validate"),
        }
    }
}

/// One validated input.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Origin of the input.
    pub source: Source,
    /// Parsed message.
    pub message: ParsedMessage,
    /// Violations, in rule order.
    pub violations: Vec<Violation>,
    /// Evaluated for reporting only; excluded from the verdict.
    pub advisory: bool,
}

impl Entry {
    fn evaluate(source: Source, raw: &str, rules: &RuleSet, enabled: bool) -> Self {
        let message = ParsedMessage::parse(raw);
        let violations = evaluate(&message, rules);
        Self {
            source,
            message,
            violations,
            advisory: !enabled,
        }
    }

    /// Whether the entry has no violations.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether the entry counts against the verdict.
    pub fn is_failing(&self) -> bool {
        !self.advisory && !self.is_valid()
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    entries: Vec<Entry>,
    advisories: Vec<Advisory>,
    overall_valid: bool,
}

impl BatchResult {
    /// All entries, title first, then commits in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Batch-level advisories.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// True iff every enabled entry has no violations.
    pub fn overall_valid(&self) -> bool {
        self.overall_valid
    }

    /// Number of entries counting against the verdict.
    pub fn failing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failing()).count()
    }

    /// Number of entries evaluated for reporting only.
    pub fn advisory_entry_count(&self) -> usize {
        self.entries.iter().filter(|e| e.advisory).count()
    }
}

/// Validate a pull request title and a list of commit messages.
pub fn validate_batch(
    title: Option<&str>,
    commits: &[CommitInput],
    rules: &RuleSet,
    options: BatchOptions,
) -> BatchResult {
    tracing::debug!(
        "Validating batch: title={}, commits={}, options={:?}",
        title.is_some(),
        commits.len(),
        options
    );

    let mut advisories = Vec::new();
    if options.validate_title && title.is_none() {
        advisories.push(Advisory::MissingTitle);
    }
    if options.validate_commits && commits.is_empty() {
        advisories.push(Advisory::NoCommits);
    }
    for advisory in &advisories {
        tracing::warn!("{}", advisory);
    }

    let title_entry = title.map(|t| Entry::evaluate(Source::Title, t, rules, options.validate_title));
    let commit_entries = commits.iter().enumerate().map(|(index, commit)| {
        Entry::evaluate(
            Source::Commit {
                index,
                id: commit.id.clone(),
            },
            &commit.message,
            rules,
            options.validate_commits,
        )
    });

    let entries: Vec<Entry> = title_entry.into_iter().chain(commit_entries).collect();
    let overall_valid = entries.iter().all(|e| !e.is_failing());

    tracing::debug!(
        "Batch complete: {} entries, valid={}",
        entries.len(),
        overall_valid
    );

    BatchResult {
        entries,
        advisories,
        overall_valid,
    }
}
