//! Time-of-day categories.

use serde::{Deserialize, Serialize};

/// Time of day a piece of text is set in.
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
pub enum TimeOfDay {
    /// Dawn, sunrise
    #[display("morning")]
    Morning,
    /// Noon, lunch
    #[display("afternoon")]
    Afternoon,
    /// Dusk, sunset
    #[display("evening")]
    Evening,
    /// Midnight, stars
    #[display("night")]
    Night,
    /// Baseline when nothing matches
    #[default]
    #[display("day")]
    Day,
}

impl TimeOfDay {
    /// Detection order; the first category with any keyword present wins.
    pub const CATEGORIES: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Stages a storyboard walks through from first to last scene.
    pub const PROGRESSION: [TimeOfDay; 4] = Self::CATEGORIES;

    /// Keywords that select this time of day.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            TimeOfDay::Morning => &["morning", "dawn", "sunrise", "early"],
            TimeOfDay::Afternoon => &["afternoon", "noon", "day", "lunch"],
            TimeOfDay::Evening => &["evening", "sunset", "dusk"],
            TimeOfDay::Night => &["night", "dark", "midnight", "stars"],
            TimeOfDay::Day => &[],
        }
    }
}
