//! Fixed eight-beat story templates.

use serde::{Deserialize, Serialize};

/// Story shape used when a single prompt is expanded into a narrative arc.
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
pub enum StoryTemplate {
    /// Call to adventure through to homecoming
    #[display("adventure")]
    Adventure,
    /// Disruption, clues, solution
    #[display("mystery")]
    Mystery,
    /// Meeting, separation, reunion
    #[display("romance")]
    Romance,
    /// Fallback arc
    #[default]
    #[display("drama")]
    Drama,
}

impl StoryTemplate {
    /// Number of beats in every template.
    pub const BEAT_COUNT: usize = 8;

    /// The template's beats in story order.
    pub fn beats(&self) -> &'static [&'static str; Self::BEAT_COUNT] {
        match self {
            StoryTemplate::Adventure => &[
                "The protagonist receives an unexpected call to adventure",
                "They hesitate but ultimately decide to embark on the journey",
                "The first challenge appears, testing their resolve",
                "A mentor or ally provides crucial guidance",
                "The main conflict intensifies dramatically",
                "All seems lost in the darkest moment",
                "The protagonist finds inner strength and faces the final challenge",
                "Victory is achieved and the journey comes full circle",
            ],
            StoryTemplate::Mystery => &[
                "A puzzling event disrupts the normal routine",
                "Initial investigation reveals strange clues",
                "The protagonist follows the first lead",
                "Red herrings and false trails emerge",
                "A breakthrough discovery changes everything",
                "The truth begins to unravel",
                "The final piece of the puzzle falls into place",
                "The mystery is solved and order is restored",
            ],
            StoryTemplate::Romance => &[
                "Two characters meet in an unexpected way",
                "Initial attraction mixed with uncertainty",
                "They spend time together and grow closer",
                "A misunderstanding or obstacle creates tension",
                "They are forced apart by circumstances",
                "Both realize what they've lost",
                "A grand gesture or moment of truth",
                "They reunite and commit to their future together",
            ],
            StoryTemplate::Drama => &[
                "The protagonist faces a difficult situation",
                "They struggle with internal conflict",
                "External pressures mount steadily",
                "A crucial decision must be made",
                "The consequences of their choice unfold",
                "They confront the reality of their situation",
                "A moment of clarity or revelation occurs",
                "Resolution brings growth and understanding",
            ],
        }
    }
}
