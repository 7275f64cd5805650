//! Exporting a storyboard for use elsewhere.

use storyboard_core::Scene;

/// All image prompts, one per scene, separated by a blank line.
///
/// # Examples
///
/// ```
/// use storyboard_narrative::{export_prompts, generate_storyboard};
/// use storyboard_core::SplitMode;
///
/// let scenes = generate_storyboard("One. Two.", SplitMode::Sentence);
/// let exported = export_prompts(&scenes);
/// assert_eq!(exported.split("\n\n").count(), 2);
/// assert!(exported.starts_with("Scene 1: One."));
/// ```
pub fn export_prompts(scenes: &[Scene]) -> String {
    scenes
        .iter()
        .map(|scene| scene.ai_prompt().as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
