// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule evaluation.

use crate::commit::ParsedMessage;

use super::builtin::{format_violation, BUILTIN_RULES};
use super::ruleset::RuleSet;
use super::violation::Violation;

/// Evaluate a parsed message against a rule set.
///
/// A header that does not match the grammar yields exactly one `format`
/// violation. Otherwise every built-in rule runs and all violations are
/// returned in rule order.
pub fn evaluate(message: &ParsedMessage, rules: &RuleSet) -> Vec<Violation> {
    let Some(header) = message.conventional() else {
        return vec![format_violation(message.header())];
    };

    BUILTIN_RULES
        .iter()
        .filter_map(|rule| rule.check(&header, rules))
        .collect()
}
