//! # Query Parameter Parser
//!
//! Turns URL query pairs into an [`AnimalQuery`].

use serde::{Deserialize, Serialize};

/// Parsed filter criteria. Absent criteria do not narrow the result.
///
/// Every criterion holds a list: a record must match each supplied value,
/// so repeating a scalar criterion with two different values matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalQuery {
    /// Every listed trait must be present on a matching record
    #[serde(rename = "personalityTraits", default)]
    pub personality_traits: Vec<String>,

    #[serde(default)]
    pub diet: Vec<String>,

    #[serde(default)]
    pub species: Vec<String>,

    #[serde(default)]
    pub name: Vec<String>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a trait (repeatable)
    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality_traits.push(trait_name.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet.push(diet.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species.push(species.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name.push(name.into());
        self
    }

    /// Parse query pairs in request order.
    ///
    /// - `personalityTraits` and `personalityTraits[]` accumulate, so a single
    ///   trait and a repeated list normalize to the same sequence
    /// - `diet`, `species`, `name` accumulate too; empty values are ignored
    /// - a lone empty `personalityTraits` value means no trait criterion
    /// - any other key is ignored
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "personalityTraits" | "personalityTraits[]" => {
                    query.personality_traits.push(value.clone());
                }
                "diet" => push_scalar(&mut query.diet, value),
                "species" => push_scalar(&mut query.species, value),
                "name" => push_scalar(&mut query.name, value),
                _ => {}
            }
        }

        if query.personality_traits.len() == 1 && query.personality_traits[0].is_empty() {
            query.personality_traits.clear();
        }

        query
    }

    /// True when no criterion is present
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_empty()
            && self.species.is_empty()
            && self.name.is_empty()
    }
}

fn push_scalar(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() {
        values.push(value.to_string());
    }
}
