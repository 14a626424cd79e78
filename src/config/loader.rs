// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CcvError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CcvConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["ccv.toml", ".ccv.toml", ".config/ccv.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
///
/// Walks up to the filesystem root, then tries the home directory. The
/// `ccv/config.toml` file under the platform config directory is checked
/// last and independently of whether a home directory is known.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let ccv_config = config_dir.join("ccv").join("config.toml");
        if ccv_config.exists() {
            return Some(ccv_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CcvConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CcvConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CcvConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CcvError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CcvError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CcvConfig> {
    toml::from_str(content).map_err(|e| {
        CcvError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, CcvConfig::default());
        assert_eq!(config.rules.max_subject_length, 100);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
max_subject_length = 50
require_scope = true
allowed_types = ["feat", "fix"]

[checks]
validate_title = false
fail_on_error = false

[ui]
color = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.max_subject_length, 50);
        assert_eq!(config.rules.min_subject_length, 3);
        assert!(config.rules.require_scope);
        assert_eq!(config.rules.allowed_types, vec!["feat", "fix"]);
        assert!(!config.checks.validate_title);
        assert!(config.checks.validate_commits);
        assert!(!config.checks.fail_on_error);
        assert!(!config.ui.color);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[rules\nmax = ").unwrap_err();
        assert!(matches!(
            err,
            CcvError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CcvError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".ccv.toml"), "[rules]\nrequire_scope = true\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".ccv.toml"));

        let config = load_config_from(&found).unwrap();
        assert!(config.rules.require_scope);
    }
}
