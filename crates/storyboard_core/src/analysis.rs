//! Whole-text classification result.

use crate::{Emotion, Environment, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Emotion, environment and time of day detected in a source text.
///
/// Computed once per generation and shared by every scene.
///
/// # Examples
///
/// ```
/// use storyboard_core::{Emotion, Environment, TextAnalysis, TimeOfDay};
///
/// let analysis = TextAnalysis::new(Emotion::Happy, Environment::Urban, TimeOfDay::Night);
/// assert_eq!(*analysis.dominant_emotion(), Emotion::Happy);
///
/// let fallback = TextAnalysis::default();
/// assert_eq!(*fallback.environment(), Environment::Neutral);
/// assert_eq!(*fallback.time_of_day(), TimeOfDay::Day);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    /// Highest scoring emotion, or the contemplative fallback
    dominant_emotion: Emotion,
    /// First matching environment, or the neutral setting
    environment: Environment,
    /// First matching time of day, or `day`
    time_of_day: TimeOfDay,
}
