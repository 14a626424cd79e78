// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from a local repository so they can be fed to the
//! batch validator.

mod repo;

pub use repo::{commit_inputs, get_commit_range, Repository};
