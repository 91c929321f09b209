//! Animal record type
//!
//! The only entity held by the store. Records are created exclusively by the
//! mutation path and are immutable once appended.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single animal entry.
///
/// Attributes the caller supplied beyond the four required fields are kept in
/// `extra` and persisted alongside the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Store-assigned identifier (store length at insertion, stringified)
    pub id: String,

    pub name: String,

    pub species: String,

    /// Free-form category such as "omnivore"
    pub diet: String,

    /// Ordered traits; duplicates are permitted
    #[serde(rename = "personalityTraits")]
    pub personality_traits: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnimalRecord {
    /// Create a record with no extra attributes
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        diet: impl Into<String>,
        personality_traits: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            diet: diet.into(),
            personality_traits,
            extra: Map::new(),
        }
    }

    /// Convert a candidate that already carries an `id` into a typed record.
    ///
    /// Returns `None` when the candidate does not have the record's shape,
    /// e.g. a trait that is not a string.
    pub fn from_candidate(candidate: Value) -> Option<Self> {
        serde_json::from_value(candidate).ok()
    }

    /// Whether the trait sequence contains `trait_name`
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == trait_name)
    }
}
