// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ccv - Conventional Commit validator
//!
//! Parses commit messages and pull request titles against the
//! Conventional Commits grammar, applies a configurable rule set and
//! renders a single pass/fail verdict with a per-message report.
//!
//! # Features
//!
//! - **Grammar Parser**: `type(scope)!: subject` headers, body and footers
//! - **Rule Engine**: allowed types, scope requirement, subject bounds and style
//! - **Batch Validation**: many commits plus a PR title in one run
//! - **Reports**: plain text and JSON, with CI-friendly exit codes
//!
//! # Example
//!
//! ```
//! use ccv::batch::{validate_batch, BatchOptions, CommitInput};
//! use ccv::report::render;
//! use ccv::rules::RuleSet;
//!
//! let rules = RuleSet::builder()
//!     .allowed_types(["feat", "fix"])
//!     .build()
//!     .unwrap();
//!
//! let commits = vec![
//!     CommitInput::from("feat: add login"),
//!     CommitInput::from("Update readme"),
//! ];
//! let result = validate_batch(None, &commits, &rules, BatchOptions::default());
//!
//! assert!(!result.overall_valid());
//! println!("{}", render(&result).summary);
//! ```

// Module declarations
pub mod batch;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use batch::{validate_batch, BatchResult};
pub use commit::ParsedMessage;
pub use config::CcvConfig;
pub use error::{CcvError, Result};
pub use rules::{evaluate, RuleSet, Violation};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of ccv.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
