// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Starter configuration files.

/// Generate an example configuration file with every option.
pub fn example_config() -> &'static str {
    r#"# ccv Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Rule configuration
[rules]
allowed_types = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert"]
require_scope = false
min_subject_length = 3
max_subject_length = 100

# Which inputs are checked
[checks]
validate_title = true
validate_commits = true
fail_on_error = true

# UI configuration
[ui]
color = true
"#
}

/// Minimal configuration.
pub fn minimal_config() -> &'static str {
    r#"# ccv Configuration (Minimal)
[rules]
max_subject_length = 100
"#
}

/// Strict configuration for CI.
pub fn strict_config() -> &'static str {
    r#"# ccv Configuration (Strict)
[rules]
allowed_types = ["feat", "fix", "docs", "refactor", "perf", "test", "build", "ci", "chore", "revert"]
require_scope = true
min_subject_length = 10
max_subject_length = 72

[checks]
validate_title = true
validate_commits = true
fail_on_error = true
"#
}
