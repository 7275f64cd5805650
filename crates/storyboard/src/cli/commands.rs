//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storyboard_core::SplitMode;

/// Storyboard - turn stories, scripts and one-line ideas into storyboards
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn stories, scripts and one-line ideas into storyboards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a storyboard from text
    ///
    /// Reads standard input when neither --text nor --file is given.
    Generate {
        /// Source text
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// File containing the source text
        #[arg(long)]
        file: Option<PathBuf>,

        /// How to cut literal input into scenes (defaults to the configured mode)
        #[arg(long)]
        split: Option<SplitArg>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Skip history and analytics, no signed-in user required
        #[arg(long)]
        no_save: bool,
    },

    /// Generation history commands
    #[command(subcommand)]
    History(HistoryCommands),

    /// Show generation analytics for a user
    Analytics {
        /// User id (defaults to the signed-in user)
        #[arg(long)]
        user: Option<String>,
    },
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List stored storyboards, newest first
    List {
        /// Maximum number of entries to display
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Output format
        #[arg(long, default_value = "human")]
        format: ListFormat,
    },

    /// Show one stored storyboard
    Show {
        /// Id of the history entry
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Remove every stored storyboard
    Clear,
}

/// Split mode options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SplitArg {
    /// One scene per sentence
    Sentence,
    /// One scene per blank-line separated paragraph
    Paragraph,
}

impl From<SplitArg> for SplitMode {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Sentence => SplitMode::Sentence,
            SplitArg::Paragraph => SplitMode::Paragraph,
        }
    }
}

/// Storyboard output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
    /// Image prompts only, separated by blank lines
    Prompts,
}

/// History listing format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ListFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
