// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for ccv.
//!
//! Handles loading, parsing and layering of configuration from
//! ccv.toml files, CLI flags and CI environment variables.

pub mod default;
mod inputs;
mod loader;
mod schema;

pub use inputs::{parse_flag, parse_length, parse_type_list, ConfigOverrides};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
