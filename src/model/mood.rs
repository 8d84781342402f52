//! The closed set of moods a user can pick from.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A mood the user can select.
///
/// The set is closed: catalog lookups match on every variant, so adding a
/// mood is a compile error until the catalog and the UI handle it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Tired,
    Motivated,
}

impl Mood {
    /// Every mood, in display order. The first entry is the startup mood.
    pub const ALL: [Self; 5] = [
        Self::Happy,
        Self::Sad,
        Self::Stressed,
        Self::Tired,
        Self::Motivated,
    ];

    /// Machine name, as used on the command line and in JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Tired => "tired",
            Self::Motivated => "motivated",
        }
    }

    /// Human-readable label shown on the mood buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy 😊",
            Self::Sad => "Sad 😔",
            Self::Stressed => "Stressed 😓",
            Self::Tired => "Tired 😴",
            Self::Motivated => "Motivated 💪",
        }
    }

    /// Position in [`Mood::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Happy => 0,
            Self::Sad => 1,
            Self::Stressed => 2,
            Self::Tired => 3,
            Self::Motivated => 4,
        }
    }

    /// Mood at `index` in [`Mood::ALL`], if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next mood in display order, wrapping after the last.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous mood in display order, wrapping before the first.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a mood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mood '{input}' (expected one of: happy, sad, stressed, tired, motivated)")]
pub struct ParseMoodError {
    pub input: String,
}

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.name() == wanted)
            .ok_or_else(|| ParseMoodError {
                input: s.to_string(),
            })
    }
}
