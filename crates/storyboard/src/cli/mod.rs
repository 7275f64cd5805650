//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod analytics;
mod backends;
mod commands;
mod generate;
mod history;
mod render;

pub use analytics::show_analytics;
pub use backends::Backends;
pub use commands::{Cli, Commands};
pub use generate::{TextSource, generate};
pub use history::handle_history_command;
