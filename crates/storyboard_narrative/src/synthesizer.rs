//! Per-scene creative metadata.

use storyboard_core::{ProgressLabel, Scene, StoryStage, TextAnalysis, TimeOfDay};

/// Captions longer than this many characters are truncated.
pub const CAPTION_MAX_CHARS: usize = 80;

/// Characters of the chunk quoted in the image prompt header.
pub const PROMPT_EXCERPT_CHARS: usize = 80;

const ELLIPSIS: &str = "...";

const DEFAULT_VISUAL: &str = "atmospheric setting with natural lighting";

const PROMPT_CLOSING_STYLE: &str =
    "cinematic composition, professional digital art, storyboard illustration";

const ENSEMBLE_CHARACTERS: &str =
    "Evolving main characters with developing relationships and growing stakes";

const MAIN_CHARACTERS: &str = "Main story characters as they appear in the narrative";

/// Story-stage ladder for image prompts, tried top to bottom against
/// `scene_number / total`.
///
/// The resolution rung sits below the 0.3 rung and can never fire. It is kept
/// so that prompts stay identical to previously generated storyboards.
const STAGE_LADDER: [(f64, StoryStage); 3] = [
    (0.6, StoryStage::Climax),
    (0.3, StoryStage::Rising),
    (0.8, StoryStage::Resolution),
];

/// Builds the scene for chunk `index` (0-based) of `total`.
///
/// # Examples
///
/// ```
/// use storyboard_narrative::synthesize_scene;
/// use storyboard_core::TextAnalysis;
///
/// let scene = synthesize_scene("Alex wakes up.", 0, 3, &TextAnalysis::default());
/// assert_eq!(*scene.number(), 1);
/// assert_eq!(scene.title(), "1. Opening");
/// assert_eq!(scene.caption(), "Alex wakes up.");
/// ```
pub fn synthesize_scene(chunk: &str, index: usize, total: usize, analysis: &TextAnalysis) -> Scene {
    let scene_number = index + 1;

    Scene::new(
        scene_number,
        format!("{}. {}", scene_number, progress_label(index, total)),
        chunk.to_string(),
        format!(
            "{} mood progressing through the narrative arc",
            analysis.dominant_emotion().capitalized()
        ),
        visual_description(analysis, scene_number, total),
        characters(total).to_string(),
        format!(
            "Lighting that supports scene {} of {} in the story progression",
            scene_number, total
        ),
        camera_direction(scene_number, total).to_string(),
        art_prompt(chunk, analysis, scene_number, total),
        caption(chunk),
    )
}

/// Title label for chunk `index` (0-based): `floor(index / total * 6)`,
/// clamped to the last label.
pub fn progress_label(index: usize, total: usize) -> ProgressLabel {
    let labels = ProgressLabel::ALL;
    let position = (fraction(index, total) * labels.len() as f64).floor() as usize;
    labels[position.min(labels.len() - 1)]
}

fn characters(total: usize) -> &'static str {
    if total > 4 {
        ENSEMBLE_CHARACTERS
    } else {
        MAIN_CHARACTERS
    }
}

/// Environment/time phrase plus a narrative progression cue.
///
/// Time of day advances morning, afternoon, evening, night across the
/// storyboard; the analyzed time is only used if the stage index falls off
/// the table.
pub fn visual_description(analysis: &TextAnalysis, scene_number: usize, total: usize) -> String {
    let stage =
        (fraction(scene_number - 1, total) * TimeOfDay::PROGRESSION.len() as f64).floor() as usize;
    let time = TimeOfDay::PROGRESSION
        .get(stage)
        .copied()
        .unwrap_or(*analysis.time_of_day());

    let base = analysis.environment().visual(time).unwrap_or(DEFAULT_VISUAL);

    let number = scene_number as f64;
    let total = total as f64;
    let cue = if scene_number <= 2 {
        "establishing atmosphere"
    } else if number <= total / 2.0 {
        "building tension"
    } else if number <= total * 0.8 {
        "dramatic intensity"
    } else {
        "resolution atmosphere"
    };

    format!("{}, {}", base, cue)
}

/// Camera direction for a scene.
pub fn camera_direction(scene_number: usize, total: usize) -> &'static str {
    let position = scene_number as f64;
    let total_f = total as f64;

    if scene_number == 1 {
        "Wide establishing shot introducing the world and characters"
    } else if scene_number == total {
        "Pulling back to wide shot for final resolution, emotional closure"
    } else if position <= total_f * 0.3 {
        "Medium shots building character connection and story setup"
    } else if position <= total_f * 0.7 {
        "Dynamic camera movement following action, increasing tension"
    } else {
        "Close-ups emphasizing emotional stakes and character reactions"
    }
}

/// Story stage used to style the image prompt.
pub fn story_stage(scene_number: usize, total: usize) -> StoryStage {
    let position = scene_number as f64;
    STAGE_LADDER
        .iter()
        .find(|(threshold, _)| position > total as f64 * threshold)
        .map(|(_, stage)| *stage)
        .unwrap_or_default()
}

/// Image-generation prompt for a scene.
///
/// Comma-joined: a `Scene N:` header quoting the chunk, the environment detail
/// (omitted for the neutral setting), the story-stage style, the emotional
/// tone and a closing style phrase.
pub fn art_prompt(
    chunk: &str,
    analysis: &TextAnalysis,
    scene_number: usize,
    total: usize,
) -> String {
    let header = format!(
        "Scene {}: {}",
        scene_number,
        take_chars(chunk, PROMPT_EXCERPT_CHARS)
    );
    let tone = format!("{} emotional tone", analysis.dominant_emotion());

    [
        Some(header.as_str()),
        analysis.environment().detail(),
        Some(story_stage(scene_number, total).style()),
        Some(tone.as_str()),
        Some(PROMPT_CLOSING_STYLE),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// The chunk itself when it fits in [`CAPTION_MAX_CHARS`], otherwise its first
/// 77 characters followed by `...`.
pub fn caption(chunk: &str) -> String {
    if chunk.chars().count() > CAPTION_MAX_CHARS {
        format!(
            "{}{}",
            take_chars(chunk, CAPTION_MAX_CHARS - ELLIPSIS.len()),
            ELLIPSIS
        )
    } else {
        chunk.to_string()
    }
}

fn fraction(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
