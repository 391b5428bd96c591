//! CLI command handlers
//!
//! Each submodule defines the clap argument types for one command and the
//! handler that executes it.

pub mod config;
pub mod split;

pub use config::{handle_config_command, ConfigArgs};
pub use split::{handle_split_command, SplitArgs, MAX_PARTICIPANTS};
