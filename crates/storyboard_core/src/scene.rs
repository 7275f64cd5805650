//! The storyboard scene record.

use serde::{Deserialize, Serialize};

/// One unit of a generated storyboard.
///
/// Scenes are built once by the synthesizer and never mutated. Field names
/// serialize in camelCase (`aiPrompt`) to match the persisted history format.
///
/// # Examples
///
/// ```
/// use storyboard_core::Scene;
///
/// let scene = Scene::new(
///     1,
///     "1. Opening".to_string(),
///     "Alex wakes up.".to_string(),
///     "Contemplative mood progressing through the narrative arc".to_string(),
///     "atmospheric setting with natural lighting, establishing atmosphere".to_string(),
///     "Main story characters as they appear in the narrative".to_string(),
///     "Lighting that supports scene 1 of 1 in the story progression".to_string(),
///     "Wide establishing shot introducing the world and characters".to_string(),
///     "Scene 1: Alex wakes up.".to_string(),
///     "Alex wakes up.".to_string(),
/// );
///
/// assert_eq!(*scene.number(), 1);
/// assert_eq!(scene.title(), "1. Opening");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// 1-based position in the storyboard
    number: usize,
    /// `"{number}. {progress label}"`
    title: String,
    /// Source chunk the scene derives from
    summary: String,
    /// Capitalized dominant emotion with a fixed qualifier
    emotion: String,
    /// Environment and time-of-day description plus a progression cue
    visual: String,
    /// Cast description
    characters: String,
    /// Lighting direction
    lighting: String,
    /// Camera direction
    camera: String,
    /// Prompt for an external image generator
    ai_prompt: String,
    /// Summary truncated for display
    caption: String,
}
