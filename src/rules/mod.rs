// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A [`RuleSet`] is built once per run and threaded explicitly through
//! [`evaluate`]; evaluation is a pure function of the message and the rules.

mod builtin;
mod engine;
mod ruleset;
mod violation;

pub use builtin::{subject_length, Rule, BUILTIN_RULES};
pub use engine::evaluate;
pub use ruleset::{
    RuleSet, RuleSetBuilder, DEFAULT_MAX_SUBJECT_LENGTH, DEFAULT_MIN_SUBJECT_LENGTH, DEFAULT_TYPES,
    MAX_HEADER_LENGTH,
};
pub use violation::{Violation, ViolationKind};
