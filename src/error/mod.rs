// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for ccv.
//!
//! Commit content problems are never errors: they are reported as
//! [`Violation`](crate::rules::Violation)s. The types here cover operator
//! mistakes (bad configuration), I/O around the engine and the final
//! pass/fail decision of the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ccv operations.
#[derive(Error, Debug)]
pub enum CcvError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation verdict
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl CcvError {
    /// Process exit code for this error.
    ///
    /// Configuration errors exit with 2 so a pipeline can tell a broken
    /// setup apart from commits that failed validation (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            CcvError::Config(_) => 2,
            CcvError::Validation(_) => 1,
            _ => 1,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("At least one allowed commit type must be configured")]
    EmptyAllowedTypes,

    #[error("Invalid subject length bounds: min {min}, max {max} (need 1 <= min <= max)")]
    InvalidSubjectBounds { min: usize, max: usize },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Validation verdict errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{failing} of {total} checked messages failed validation")]
    Failed { failing: usize, total: usize },
}

/// Result type alias for ccv operations.
pub type Result<T> = std::result::Result<T, CcvError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CcvError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
