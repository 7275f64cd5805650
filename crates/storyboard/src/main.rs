//! Storyboard CLI binary.
//!
//! This binary provides command-line access to storyboard generation:
//! - Generate storyboards from text, files or stdin
//! - Browse and clear the generation history
//! - Inspect per-user generation analytics

use clap::Parser;
use storyboard::{ObservabilityConfig, StoryboardConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Backends, Cli, Commands, TextSource, generate, handle_history_command, show_analytics};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = StoryboardConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    init_observability_with_config(
        ObservabilityConfig::default()
            .with_log_level(config.logging.level.clone())
            .with_json_logs(config.logging.json)
            .with_verbose(cli.verbose),
    )?;

    let backends = Backends::from_config(&config)?;

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            text,
            file,
            split,
            format,
            no_save,
        } => {
            let source = match (&text, &file) {
                (Some(text), _) => TextSource::Inline(text),
                (None, Some(path)) => TextSource::File(path),
                (None, None) => TextSource::Stdin,
            };
            generate(&backends, source, split.map(Into::into), format, no_save).await?;
        }

        Commands::History(history_cmd) => {
            handle_history_command(&backends, history_cmd).await?;
        }

        Commands::Analytics { user } => {
            show_analytics(&backends, user).await?;
        }
    }

    Ok(())
}
