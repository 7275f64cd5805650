//! Terminal rendering of storyboards.

use super::commands::OutputFormat;
use storyboard::{JsonError, Scene, StoryboardResult, export_prompts};

/// Print scenes to stdout in the requested format.
pub fn print_scenes(scenes: &[Scene], format: OutputFormat) -> StoryboardResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(scenes).map_err(JsonError::from)?;
            println!("{}", json);
        }
        OutputFormat::Prompts => {
            println!("{}", export_prompts(scenes));
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for scene in scenes {
                println!("{}", scene.title());
                println!("  Caption:    {}", scene.caption());
                println!("  Emotion:    {}", scene.emotion());
                println!("  Visual:     {}", scene.visual());
                println!("  Characters: {}", scene.characters());
                println!("  Lighting:   {}", scene.lighting());
                println!("  Camera:     {}", scene.camera());
                println!("  Prompt:     {}", scene.ai_prompt());
                println!("{:-<80}", "");
            }
            println!("Total: {} scenes", scenes.len());
        }
    }

    Ok(())
}

/// First `max` characters of `text` on one line.
pub fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}...", cut)
    }
}
