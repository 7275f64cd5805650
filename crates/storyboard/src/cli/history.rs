//! History command handlers.

use super::backends::Backends;
use super::commands::{HistoryCommands, ListFormat};
use super::render::{excerpt, print_scenes};
use storyboard::{HistoryStore, JsonError, StoryboardResult};

/// Handle history commands.
pub async fn handle_history_command(
    backends: &Backends,
    cmd: HistoryCommands,
) -> StoryboardResult<()> {
    match cmd {
        HistoryCommands::List { limit, format } => list_history(backends, limit, format).await,
        HistoryCommands::Show { id, format } => {
            let Some(entry) = backends.history.get(&id).await? else {
                eprintln!("Error: No history entry with id '{}'", id);
                std::process::exit(1);
            };
            print_scenes(entry.scenes(), format)
        }
        HistoryCommands::Clear => {
            backends.history.clear().await?;
            println!("History cleared");
            Ok(())
        }
    }
}

async fn list_history(
    backends: &Backends,
    limit: usize,
    format: ListFormat,
) -> StoryboardResult<()> {
    let entries: Vec<_> = backends
        .history
        .list()
        .await?
        .into_iter()
        .take(limit)
        .collect();

    match format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(JsonError::from)?;
            println!("{}", json);
        }
        ListFormat::Human => {
            if entries.is_empty() {
                println!("No storyboards in history");
                return Ok(());
            }

            println!("{:<36}  {:<20}  {:>6}  Source", "ID", "Generated", "Scenes");
            println!("{:-<100}", "");
            for entry in &entries {
                println!(
                    "{:<36}  {:<20}  {:>6}  {}",
                    entry.id(),
                    entry.generated_at().format("%Y-%m-%d %H:%M:%S"),
                    entry.scenes().len(),
                    excerpt(entry.source_script(), 30)
                );
            }
            println!("{:-<100}", "");
            println!(
                "Showing {} of at most {} retained",
                entries.len(),
                backends.history.capacity()
            );
        }
    }

    Ok(())
}
