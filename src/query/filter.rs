//! # Record Filter
//!
//! Criteria combine with AND logic, including multiple traits. Each criterion
//! is applied as a narrowing pass over the surviving candidates, in the order
//! traits, diet, species, name.
//!
//! This is a plain linear scan, O(records x criteria x traits). The whole
//! dataset is resident and small, so there is no index.

use crate::record::AnimalRecord;

use super::parser::AnimalQuery;

/// Returns the records matching every criterion in `query`, in store order.
///
/// An empty query returns every record.
pub fn filter_by_query<'a>(records: &'a [AnimalRecord], query: &AnimalQuery) -> Vec<&'a AnimalRecord> {
    let mut results: Vec<&AnimalRecord> = records.iter().collect();

    for trait_name in &query.personality_traits {
        results.retain(|animal| animal.has_trait(trait_name));
    }

    for diet in &query.diet {
        results.retain(|animal| &animal.diet == diet);
    }

    for species in &query.species {
        results.retain(|animal| &animal.species == species);
    }

    for name in &query.name {
        results.retain(|animal| &animal.name == name);
    }

    results
}

/// Returns the first record whose id equals `id` exactly.
pub fn find_by_id<'a>(records: &'a [AnimalRecord], id: &str) -> Option<&'a AnimalRecord> {
    records.iter().find(|animal| animal.id == id)
}
