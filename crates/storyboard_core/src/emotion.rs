//! Emotion categories and their keyword sets.

use serde::{Deserialize, Serialize};

/// Dominant emotion of a piece of text.
///
/// # Examples
///
/// ```
/// use storyboard_core::Emotion;
///
/// assert_eq!(Emotion::default(), Emotion::Contemplative);
/// assert_eq!(Emotion::Adventurous.to_string(), "adventurous");
/// assert_eq!(Emotion::Happy.capitalized(), "Happy");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Joyful, cheerful text
    #[display("happy")]
    Happy,
    /// Sorrowful text
    #[display("sad")]
    Sad,
    /// Furious, frustrated text
    #[display("angry")]
    Angry,
    /// Fearful text
    #[display("scared")]
    Scared,
    /// Secretive, unknown, dark text
    #[display("mysterious")]
    Mysterious,
    /// Loving, tender text
    #[display("romantic")]
    Romantic,
    /// Journeys, quests, bold exploration
    #[display("adventurous")]
    Adventurous,
    /// Fallback when no keyword scores
    #[default]
    #[display("contemplative")]
    Contemplative,
}

impl Emotion {
    /// Scored categories in tie-break order. The fallback is not listed.
    pub const CATEGORIES: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Scared,
        Emotion::Mysterious,
        Emotion::Romantic,
        Emotion::Adventurous,
    ];

    /// Keywords counted toward this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Happy => &[
                "happy", "joy", "smile", "laugh", "cheerful", "excited", "delighted",
            ],
            Emotion::Sad => &[
                "sad", "cry", "tears", "sorrow", "grief", "melancholy", "depressed",
            ],
            Emotion::Angry => &["angry", "rage", "furious", "mad", "irritated", "frustrated"],
            Emotion::Scared => &[
                "scared",
                "afraid",
                "fear",
                "terrified",
                "frightened",
                "nervous",
            ],
            Emotion::Mysterious => &["mystery", "strange", "unknown", "secret", "hidden", "dark"],
            Emotion::Romantic => &["love", "heart", "kiss", "romance", "tender", "passionate"],
            Emotion::Adventurous => &["adventure", "journey", "explore", "quest", "brave", "bold"],
            Emotion::Contemplative => &[],
        }
    }

    /// Category name with its first letter upper-cased.
    pub fn capitalized(&self) -> String {
        let name = self.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
