// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ccv - Conventional Commit validator
///
/// Validates commit messages and pull request titles against the
/// Conventional Commits grammar and a configurable rule set.
#[derive(Parser, Debug)]
#[command(name = "ccv")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional Commit validator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CCV_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate commit messages and a pull request title (default command)
    Check(CheckArgs),

    /// Print version information
    Version,

    /// Initialize ccv configuration
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Pull request title to validate
    #[arg(long, env = "CCV_PR_TITLE")]
    pub title: Option<String>,

    /// Commit message to validate (repeatable)
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// File of NUL-separated commit messages ('-' for stdin)
    #[arg(long, value_name = "PATH")]
    pub messages_file: Option<PathBuf>,

    /// Git revision range to read commits from (e.g. origin/main..HEAD)
    #[arg(long, env = "CCV_RANGE")]
    pub range: Option<String>,

    /// Comma-separated list of allowed commit types
    #[arg(long, env = "CCV_ALLOWED_TYPES")]
    pub allowed_types: Option<String>,

    /// Require a scope on every message (true/false)
    #[arg(long, env = "CCV_REQUIRE_SCOPE")]
    pub require_scope: Option<String>,

    /// Minimum subject length
    #[arg(long, env = "CCV_MIN_SUBJECT_LENGTH")]
    pub min_subject_length: Option<String>,

    /// Maximum subject length
    #[arg(long, env = "CCV_MAX_SUBJECT_LENGTH")]
    pub max_subject_length: Option<String>,

    /// Validate the pull request title (true/false)
    #[arg(long, env = "CCV_VALIDATE_TITLE")]
    pub validate_title: Option<String>,

    /// Validate commit messages (true/false)
    #[arg(long, env = "CCV_VALIDATE_COMMITS")]
    pub validate_commits: Option<String>,

    /// Exit non-zero when validation fails (true/false)
    #[arg(long, env = "CCV_FAIL_ON_ERROR")]
    pub fail_on_error: Option<String>,
}

impl CheckArgs {
    /// Configuration overrides carried by these arguments.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            allowed_types: self.allowed_types.clone(),
            require_scope: self.require_scope.clone(),
            min_subject_length: self.min_subject_length.clone(),
            max_subject_length: self.max_subject_length.clone(),
            validate_title: self.validate_title.clone(),
            validate_commits: self.validate_commits.clone(),
            fail_on_error: self.fail_on_error.clone(),
        }
    }
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Minimal configuration
    Minimal,
    /// Standard configuration (recommended)
    Standard,
    /// Strict configuration for CI
    Strict,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    ///
    /// The implicit check still picks up its `CCV_*` environment variables.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| {
            Commands::Check(CheckArgs::try_parse_from(["check"]).unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from([
            "ccv",
            "check",
            "--title",
            "feat: add login",
            "-m",
            "fix: one",
            "-m",
            "fix: two",
            "--require-scope",
            "true",
        ]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.title.as_deref(), Some("feat: add login"));
            assert_eq!(check_args.messages, vec!["fix: one", "fix: two"]);
            assert_eq!(check_args.overrides().require_scope.as_deref(), Some("true"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_init() {
        let args = Cli::parse_from(["ccv", "init", "--preset", "strict", "--force"]);
        if let Some(Commands::Init(init)) = args.command {
            assert!(init.force);
            assert_eq!(init.preset, Some(ConfigPreset::Strict));
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["ccv", "--format", "json", "check", "--debug"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["ccv"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check(_)));
    }
}
