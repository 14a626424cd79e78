// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::batch::{validate_batch, CommitInput};
use crate::config::CcvConfig;
use crate::error::{CcvError, ConfigError, Result, ResultExt, ValidationError};
use crate::report;
use std::io::Read;
use std::path::Path;

use super::args::{CheckArgs, Cli, Commands, ConfigPreset, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &load_config(&cli)?, args),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

fn load_config(cli: &Cli) -> Result<CcvConfig> {
    if let Some(config_path) = &cli.config {
        CcvConfig::load_from(config_path)
    } else {
        CcvConfig::load()
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CcvConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let mut config = config.clone();
    args.overrides().apply(&mut config)?;

    // Configuration errors halt before any message is evaluated
    let rules = config.rules.to_rule_set()?;

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    let commits = collect_commits(&args)?;
    let title = args
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty());

    let result = validate_batch(title, &commits, &rules, config.batch_options());
    let rendered = report::render(&result);

    match cli.format {
        Some(OutputFormat::Json) => {
            let json = report::render_json(&result);
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            print!("{}", rendered.summary);
            println!();
            println!("{}", rendered.verdict_line());
        }
    }

    if report::exit_code(rendered.valid, config.checks.fail_on_error) != 0 {
        return Err(CcvError::Validation(ValidationError::Failed {
            failing: rendered.failing,
            total: rendered.total,
        }));
    }

    if !rendered.valid {
        tracing::warn!("Validation failed but fail_on_error is disabled");
    }

    Ok(())
}

/// Gather commit messages from arguments, a messages file and a git range.
fn collect_commits(args: &CheckArgs) -> Result<Vec<CommitInput>> {
    let mut commits: Vec<CommitInput> = args
        .messages
        .iter()
        .map(|m| CommitInput::from(m.as_str()))
        .collect();

    if let Some(ref path) = args.messages_file {
        let content = read_messages_file(path)?;
        commits.extend(split_messages(&content));
    }

    if let Some(ref range) = args.range {
        commits.extend(crate::git::get_commit_range(range)?);
    }

    Ok(commits)
}

fn read_messages_file(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read messages from stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path)
            .context(format!("Failed to read messages file {}", path.display()))
    }
}

/// Split NUL-separated messages, skipping blank records.
fn split_messages(content: &str) -> Vec<CommitInput> {
    content
        .split('\0')
        .map(|m| m.trim_start_matches(['\n', '\r']))
        .filter(|m| !m.trim().is_empty())
        .map(CommitInput::from)
        .collect()
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("ccv {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::{example_config, minimal_config, strict_config};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("ccv.toml");

    if config_path.exists() && !args.force {
        return Err(CcvError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Minimal) => minimal_config(),
        Some(ConfigPreset::Strict) => strict_config(),
        Some(ConfigPreset::Standard) | None => example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write configuration")?;

    println!("✓ Created ccv.toml");

    Ok(())
}
