//! Expanding a one-line prompt into an eight-beat narrative arc.

use crate::analyze;
use storyboard_core::{Emotion, Environment, KeyElement, StoryTemplate, TextAnalysis};

/// At most this many key elements are woven into an arc.
pub const MAX_KEY_ELEMENTS: usize = 3;

/// Expands `prompt` into [`StoryTemplate::BEAT_COUNT`] story beats.
///
/// Key element one is woven into the first beat, element two into the middle
/// beat and element three into the last. Every third beat (indices 0, 3, 6)
/// gains an environment clause when the prompt has a recognizable setting.
///
/// # Examples
///
/// ```
/// use storyboard_narrative::synthesize_arc;
///
/// let beats = synthesize_arc("A storm over the city");
/// assert_eq!(beats.len(), 8);
/// assert_eq!(
///     beats[0],
///     "The protagonist faces a difficult situation involving stormy weather in a urban"
/// );
/// assert_eq!(
///     beats[4],
///     "The consequences of their choice unfold in the context of urban setting"
/// );
/// ```
#[tracing::instrument(level = "debug", skip(prompt), fields(len = prompt.len()))]
pub fn synthesize_arc(prompt: &str) -> Vec<String> {
    let analysis = analyze(prompt);
    let template = select_template(prompt, &analysis);
    let elements = extract_key_elements(prompt);
    let environment = *analysis.environment();

    tracing::debug!(%template, element_count = elements.len(), %environment, "Synthesizing arc");

    let beats = template.beats();
    let middle = beats.len() / 2;
    let last = beats.len() - 1;

    beats
        .iter()
        .enumerate()
        .map(|(index, beat)| {
            let mut adapted = beat.to_string();

            if index == 0 && !elements.is_empty() {
                adapted.push_str(&format!(" involving {}", elements[0]));
            } else if index == middle && elements.len() > 1 {
                adapted.push_str(&format!(" in the context of {}", elements[1]));
            } else if index == last && elements.len() > 2 {
                adapted.push_str(&format!(" with {} playing a crucial role", elements[2]));
            }

            if index % 3 == 0 && environment != Environment::Neutral {
                adapted.push_str(&format!(" in a {}", environment));
            }

            adapted
        })
        .collect()
}

/// Picks the arc template for `prompt`.
///
/// Rules are tried in order (adventure, mystery, romance); each fires on the
/// analyzed emotion or on a case-sensitive substring of the prompt. Drama is
/// the fallback.
pub fn select_template(prompt: &str, analysis: &TextAnalysis) -> StoryTemplate {
    let rules = [
        (StoryTemplate::Adventure, Emotion::Adventurous, ["journey", "quest"]),
        (StoryTemplate::Mystery, Emotion::Mysterious, ["mystery", "secret"]),
        (StoryTemplate::Romance, Emotion::Romantic, ["love", "romance"]),
    ];

    rules
        .into_iter()
        .find(|(_, emotion, cues)| {
            analysis.dominant_emotion() == emotion || cues.iter().any(|cue| prompt.contains(cue))
        })
        .map(|(template, _, _)| template)
        .unwrap_or_default()
}

/// Finds up to [`MAX_KEY_ELEMENTS`] key elements in scan order.
///
/// Matching is by substring of the lower-cased prompt.
pub fn extract_key_elements(prompt: &str) -> Vec<KeyElement> {
    let lowered = prompt.to_lowercase();
    KeyElement::ALL
        .into_iter()
        .filter(|element| element.triggers().iter().any(|trigger| lowered.contains(trigger)))
        .take(MAX_KEY_ELEMENTS)
        .collect()
}
