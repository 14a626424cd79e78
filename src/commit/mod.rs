// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message grammar.

mod message;

pub use message::{ConventionalHeader, Footer, ParsedMessage};
