//! Whole-text classification by keyword matching.

use std::collections::HashSet;
use storyboard_core::{Emotion, Environment, TextAnalysis, TimeOfDay};

/// Classifies `text` by dominant emotion, environment and time of day.
///
/// Tokens are the lower-cased, whitespace-separated words of the text and are
/// compared exactly, so punctuation stays attached (`"happy."` is not
/// `"happy"`).
///
/// - Emotion: each category scores one point per keyword present. The strictly
///   highest score wins and ties go to the earlier category. No hits yields
///   [`Emotion::Contemplative`].
/// - Environment and time of day: the first category with any keyword present
///   wins, falling back to [`Environment::Neutral`] and [`TimeOfDay::Day`].
///
/// # Examples
///
/// ```
/// use storyboard_narrative::analyze;
/// use storyboard_core::{Emotion, Environment, TimeOfDay};
///
/// let analysis = analyze("A brave quest through the forest at dawn");
/// assert_eq!(*analysis.dominant_emotion(), Emotion::Adventurous);
/// assert_eq!(*analysis.environment(), Environment::Outdoor);
/// assert_eq!(*analysis.time_of_day(), TimeOfDay::Morning);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn analyze(text: &str) -> TextAnalysis {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = lowered.split_whitespace().collect();

    let analysis = TextAnalysis::new(
        dominant_emotion(&tokens),
        first_match(&Environment::CATEGORIES, Environment::keywords, &tokens).unwrap_or_default(),
        first_match(&TimeOfDay::CATEGORIES, TimeOfDay::keywords, &tokens).unwrap_or_default(),
    );

    tracing::trace!(?analysis, "Analyzed text");
    analysis
}

fn dominant_emotion(tokens: &HashSet<&str>) -> Emotion {
    let mut dominant = Emotion::default();
    let mut max_score = 0;

    for emotion in Emotion::CATEGORIES {
        let score = emotion
            .keywords()
            .iter()
            .filter(|keyword| tokens.contains(*keyword))
            .count();
        if score > max_score {
            max_score = score;
            dominant = emotion;
        }
    }

    dominant
}

fn first_match<T: Copy>(
    categories: &[T],
    keywords: fn(&T) -> &'static [&'static str],
    tokens: &HashSet<&str>,
) -> Option<T> {
    categories
        .iter()
        .find(|category| keywords(*category).iter().any(|keyword| tokens.contains(keyword)))
        .copied()
}
