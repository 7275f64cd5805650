//! Generate command handler.

use super::backends::Backends;
use super::commands::OutputFormat;
use super::render::print_scenes;
use std::io::Read;
use std::path::Path;
use storyboard::{
    SplitMode, StorageError, StorageErrorKind, StoryboardResult, USER_ENV_VAR,
};

/// Where the source text comes from.
#[derive(Debug)]
pub enum TextSource<'a> {
    /// Given inline
    Inline(&'a str),
    /// Read from a file
    File(&'a Path),
    /// Read from standard input
    Stdin,
}

impl TextSource<'_> {
    fn read(&self) -> StoryboardResult<String> {
        match self {
            TextSource::Inline(text) => Ok((*text).to_string()),
            TextSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into()
            }),
            TextSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).map_err(|e| {
                    StorageError::new(StorageErrorKind::FileRead(format!("stdin: {}", e)))
                })?;
                Ok(text)
            }
        }
    }
}

/// Generate a storyboard and print it.
#[tracing::instrument(skip(backends, source))]
pub async fn generate(
    backends: &Backends,
    source: TextSource<'_>,
    split: Option<SplitMode>,
    format: OutputFormat,
    no_save: bool,
) -> StoryboardResult<()> {
    let text = source.read()?;

    if no_save {
        let scenes = backends.generator.generate(&text, split);
        return print_scenes(&scenes, format);
    }

    let Some(entry) = backends.session().generate(&text, split).await? else {
        eprintln!(
            "Error: No signed-in user. Set {} or pass --no-save.",
            USER_ENV_VAR
        );
        std::process::exit(1);
    };

    print_scenes(entry.scenes(), format)?;
    if matches!(format, OutputFormat::Human) {
        println!("Saved to history as {}", entry.id());
    }

    Ok(())
}
