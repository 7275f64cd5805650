//! Top-level storyboard generation.

use crate::{analyze, segment, synthesize_scene};
use storyboard_core::{Scene, SplitMode};

/// Turns `source` into an ordered storyboard.
///
/// Analysis always runs on the full source text, even when the scenes come
/// from a synthesized arc. Scene numbers run `1..=N` in chunk order.
///
/// # Examples
///
/// ```
/// use storyboard_narrative::generate_storyboard;
/// use storyboard_core::SplitMode;
///
/// assert!(generate_storyboard("", SplitMode::Sentence).is_empty());
///
/// let scenes = generate_storyboard("First part.\n\nSecond part.", SplitMode::Paragraph);
/// assert_eq!(scenes.len(), 2);
/// ```
#[tracing::instrument(skip(source), fields(len = source.len()))]
pub fn generate_storyboard(source: &str, split: SplitMode) -> Vec<Scene> {
    let chunks = segment(source, split);
    let total = chunks.len();
    let analysis = analyze(source);

    let scenes: Vec<Scene> = chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| synthesize_scene(chunk, index, total, &analysis))
        .collect();

    tracing::debug!(
        scene_count = scenes.len(),
        emotion = %analysis.dominant_emotion(),
        environment = %analysis.environment(),
        "Generated storyboard"
    );
    scenes
}

/// Storyboard generator carrying a default split mode.
///
/// # Examples
///
/// ```
/// use storyboard_narrative::StoryboardGenerator;
/// use storyboard_core::SplitMode;
///
/// let generator = StoryboardGenerator::new(SplitMode::Paragraph);
/// let scenes = generator.generate("One.\nStill one.\n\nTwo.", None);
/// assert_eq!(scenes.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoryboardGenerator {
    default_split: SplitMode,
}

impl StoryboardGenerator {
    /// Creates a generator that splits with `default_split` unless told otherwise.
    pub fn new(default_split: SplitMode) -> Self {
        Self { default_split }
    }

    /// The split mode used when none is given.
    pub fn default_split(&self) -> SplitMode {
        self.default_split
    }

    /// Generates a storyboard, overriding the default split mode if `split` is set.
    pub fn generate(&self, source: &str, split: Option<SplitMode>) -> Vec<Scene> {
        generate_storyboard(source, split.unwrap_or(self.default_split))
    }
}
