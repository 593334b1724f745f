//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the crosspost binary.

mod commands;
mod config;
mod plan;
mod prepare;

pub use commands::{Cli, Commands};
pub use config::{handle_config_command, load_config};
pub use plan::handle_plan_command;
pub use prepare::handle_prepare_command;
