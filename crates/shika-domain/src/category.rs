//! Object category - coarse bucket for what a train struck

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the struck object
///
/// Downstream renderers pick a marker icon per category. The set is closed;
/// anything the classifier does not know lands in [`ObjectCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    /// Deer (by far the most common)
    Deer,

    /// Bear
    Bear,

    /// Birds
    Bird,

    /// Fallen trees on the track
    FallenTree,

    /// Road vehicles at crossings
    Vehicle,

    /// Anything else
    Other,
}

impl ObjectCategory {
    /// All categories, in display order
    pub const ALL: [ObjectCategory; 6] = [
        ObjectCategory::Deer,
        ObjectCategory::Bear,
        ObjectCategory::Bird,
        ObjectCategory::FallenTree,
        ObjectCategory::Vehicle,
        ObjectCategory::Other,
    ];

    /// Get the category tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectCategory::Deer => "deer",
            ObjectCategory::Bear => "bear",
            ObjectCategory::Bird => "bird",
            ObjectCategory::FallenTree => "fallen_tree",
            ObjectCategory::Vehicle => "vehicle",
            ObjectCategory::Other => "other",
        }
    }

    /// Parse a category tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deer" => Some(ObjectCategory::Deer),
            "bear" => Some(ObjectCategory::Bear),
            "bird" => Some(ObjectCategory::Bird),
            "fallen_tree" => Some(ObjectCategory::FallenTree),
            "vehicle" => Some(ObjectCategory::Vehicle),
            "other" => Some(ObjectCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ObjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid object category: {}", s))
    }
}
