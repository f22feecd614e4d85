// Emodex Type Definitions
// Core types for the emoji catalog and lookup errors

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Catalog categories, mirroring the Unicode emoji groups
///
/// Serialized names are camelCase (e.g. "smileysAndEmotion"), which is also
/// the spelling accepted from user input via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Faces, cat faces, hearts
    SmileysAndEmotion,
    /// Hands, gestures, body parts
    PeopleAndBody,
    /// Animals, plants, weather
    AnimalsAndNature,
    /// Food, drink, dishware
    FoodAndDrink,
    /// Places, transport, sky
    TravelAndPlaces,
    /// Sports, games, music
    Activity,
    /// Tools, household, office
    Objects,
    /// Marks, signs, input symbols
    Symbols,
    /// Flags and flag sequences
    Flags,
}

/// Every category, in catalog group order
pub const ALL_CATEGORIES: [Category; 9] = [
    Category::SmileysAndEmotion,
    Category::PeopleAndBody,
    Category::AnimalsAndNature,
    Category::FoodAndDrink,
    Category::TravelAndPlaces,
    Category::Activity,
    Category::Objects,
    Category::Symbols,
    Category::Flags,
];

impl Category {
    /// The camelCase name used in the catalog data and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Category::SmileysAndEmotion => "smileysAndEmotion",
            Category::PeopleAndBody => "peopleAndBody",
            Category::AnimalsAndNature => "animalsAndNature",
            Category::FoodAndDrink => "foodAndDrink",
            Category::TravelAndPlaces => "travelAndPlaces",
            Category::Activity => "activity",
            Category::Objects => "objects",
            Category::Symbols => "symbols",
            Category::Flags => "flags",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| LookupError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// One emoji with its descriptive tags and optional emoticon aliases
///
/// `emoji` holds a single emoji character or grapheme sequence (flag and
/// variation-selector sequences included). `tags` are kebab-case lookup
/// names. `emoticons`, when present, is a non-empty list of shorthand
/// aliases like ":D"; aliases never contain whitespace and are unique
/// within a record, though two records may claim the same alias (the
/// earlier record in catalog order wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// The emoji itself (e.g. "😃")
    pub emoji: String,

    /// Descriptive tags for lookup and fuzzy search (e.g. "happy-face")
    pub tags: Vec<String>,

    /// Emoticon shorthand aliases (e.g. ":D"), absent for most records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoticons: Option<Vec<String>>,

    /// Catalog group this record belongs to
    pub category: Category,
}

impl EmojiRecord {
    /// Create a record without emoticon aliases
    pub fn new(emoji: impl Into<String>, tags: Vec<String>, category: Category) -> Self {
        Self {
            emoji: emoji.into(),
            tags,
            emoticons: None,
            category,
        }
    }

    /// Attach emoticon aliases
    pub fn with_emoticons(mut self, emoticons: Vec<String>) -> Self {
        self.emoticons = Some(emoticons);
        self
    }

    /// Whether this record carries at least one emoticon alias
    pub fn has_emoticons(&self) -> bool {
        self.emoticons.as_ref().map_or(false, |e| !e.is_empty())
    }

    /// The emoticon aliases, empty when the record has none
    pub fn aliases(&self) -> &[String] {
        self.emoticons.as_deref().unwrap_or(&[])
    }
}

/// Catalog lookup errors
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("no emoji exists for tag '{tag}'")]
    UnknownTag { tag: String },

    #[error("'{name}' is not a valid category: expected one of smileysAndEmotion, peopleAndBody, animalsAndNature, foodAndDrink, travelAndPlaces, activity, objects, symbols, flags")]
    UnknownCategory { name: String },
}
