// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit message parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header shape: `type[(scope)][!]: subject`.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[a-z]+)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).unwrap();

    /// Git trailer shape: `Token: value` or `Token #value`.
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"^(?P<token>BREAKING[ -]CHANGE|[A-Za-z][A-Za-z0-9-]*)(?:: | #)(?P<value>.*)$"
    ).unwrap();
}

/// A single footer (git trailer) of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Trailer token, e.g. `Refs` or `BREAKING CHANGE`.
    pub token: String,
    /// Trailer value, continuation lines joined with `\n`.
    pub value: String,
}

impl Footer {
    /// Whether this footer announces a breaking change.
    pub fn is_breaking_change(&self) -> bool {
        self.token == "BREAKING CHANGE" || self.token == "BREAKING-CHANGE"
    }
}

/// A raw message decomposed against the Conventional Commits grammar.
///
/// Parsing never fails. When the header does not match the grammar the
/// type and subject are absent and the evaluator reports a `format`
/// violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    raw: String,
    header: String,
    commit_type: Option<String>,
    scope: Option<String>,
    breaking: bool,
    subject: Option<String>,
    body: Option<String>,
    footers: Vec<Footer>,
}

/// Borrowed view of a header that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConventionalHeader<'a> {
    /// The full header line.
    pub header: &'a str,
    /// Commit type.
    pub commit_type: &'a str,
    /// Scope, possibly empty when written as `()`.
    pub scope: Option<&'a str>,
    /// `!` marker before the colon.
    pub breaking: bool,
    /// Subject, trailing whitespace removed.
    pub subject: &'a str,
}

impl ParsedMessage {
    /// Parse a raw commit message or pull request title.
    pub fn parse(raw: &str) -> Self {
        let mut lines = raw.lines();
        let header = lines
            .next()
            .unwrap_or("")
            .trim_end_matches('\r')
            .to_string();

        let (commit_type, scope, breaking, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures.name("type").map(|m| m.as_str().to_string()),
                captures.name("scope").map(|m| m.as_str().to_string()),
                captures.name("breaking").is_some(),
                captures
                    .name("subject")
                    .map(|m| m.as_str().trim_end().to_string()),
            ),
            None => (None, None, false, None),
        };

        let rest: Vec<&str> = lines.map(|l| l.trim_end_matches('\r')).collect();
        let (body, footers) = split_body_and_footers(&rest);

        Self {
            raw: raw.to_string(),
            header,
            commit_type,
            scope,
            breaking,
            subject,
            body,
            footers,
        }
    }

    /// The original input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The first line of the input.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Commit type, absent when the header did not match.
    pub fn commit_type(&self) -> Option<&str> {
        self.commit_type.as_deref()
    }

    /// Scope, if one was written.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Whether the header carries the `!` breaking marker.
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// Subject, absent when the header did not match.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Free-form body text.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Parsed footers.
    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    /// Whether a `BREAKING CHANGE` footer is present.
    pub fn breaking_footer(&self) -> bool {
        self.footers.iter().any(Footer::is_breaking_change)
    }

    /// Breaking via header marker or footer.
    pub fn is_breaking(&self) -> bool {
        self.breaking || self.breaking_footer()
    }

    /// The matched header fields, if the header follows the grammar.
    pub fn conventional(&self) -> Option<ConventionalHeader<'_>> {
        Some(ConventionalHeader {
            header: &self.header,
            commit_type: self.commit_type.as_deref()?,
            scope: self.scope.as_deref(),
            breaking: self.breaking,
            subject: self.subject.as_deref()?,
        })
    }
}

/// Split everything after the header into body and trailing footers.
fn split_body_and_footers(lines: &[&str]) -> (Option<String>, Vec<Footer>) {
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for &line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    let has_footers = paragraphs
        .last()
        .and_then(|p| p.first())
        .map(|first| FOOTER_REGEX.is_match(first))
        .unwrap_or(false);

    let footers = if has_footers {
        paragraphs.pop().map(|p| parse_footers(&p)).unwrap_or_default()
    } else {
        Vec::new()
    };

    let body = paragraphs
        .iter()
        .map(|p| p.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    let body = if body.is_empty() { None } else { Some(body) };

    (body, footers)
}

fn parse_footers(lines: &[&str]) -> Vec<Footer> {
    let mut footers: Vec<Footer> = Vec::new();

    for &line in lines {
        if let Some(captures) = FOOTER_REGEX.captures(line) {
            footers.push(Footer {
                token: captures["token"].to_string(),
                value: captures["value"].to_string(),
            });
        } else if let Some(last) = footers.last_mut() {
            last.value.push('\n');
            last.value.push_str(line);
        }
    }

    footers
}
