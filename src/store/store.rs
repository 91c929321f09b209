//! Animal record store
//!
//! Owns the in-memory record sequence (the runtime source of truth) and the
//! persistence handle that mirrors it. The sequence is append-only: there is
//! no update or delete, which keeps length-derived ids unique.

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use crate::query::{filter_by_query, find_by_id, AnimalQuery};
use crate::record::AnimalRecord;
use crate::schema::{validate_animal, SchemaError, ValidationDetails};
use crate::storage::{RecordPersistence, StorageResult};

/// Record store backed by a persistence mirror.
///
/// Mutation takes `&mut self`; callers sharing a store across requests wrap it
/// in a lock so that writes, including the mirror rewrite, run one at a time.
pub struct AnimalStore<P: RecordPersistence> {
    records: Vec<AnimalRecord>,
    persistence: P,
}

impl<P: RecordPersistence> AnimalStore<P> {
    /// Bootstrap the store from the persisted mirror.
    pub fn open(persistence: P) -> StorageResult<Self> {
        let records = persistence.load()?;
        tracing::info!(records = records.len(), "animal store loaded");
        Ok(Self {
            records,
            persistence,
        })
    }

    /// All records in insertion order
    pub fn records(&self) -> &[AnimalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching every criterion in `query`
    pub fn filter(&self, query: &AnimalQuery) -> Vec<&AnimalRecord> {
        filter_by_query(&self.records, query)
    }

    /// First record with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&AnimalRecord> {
        find_by_id(&self.records, id)
    }

    /// Id the next accepted record will receive
    pub fn next_id(&self) -> String {
        self.records.len().to_string()
    }

    /// Create a record from a caller-supplied candidate.
    ///
    /// Order of effects:
    /// 1. `id` is set on the candidate (overwriting any caller value)
    /// 2. the candidate is validated; on failure nothing is stored
    /// 3. the record is appended and the whole sequence is saved
    ///
    /// If the save fails the append is undone, so memory and mirror never
    /// diverge. A rejected candidate does not advance the id sequence.
    pub fn create(&mut self, mut candidate: Value) -> StoreResult<AnimalRecord> {
        let id = self.next_id();
        if let Some(obj) = candidate.as_object_mut() {
            obj.insert("id".to_string(), Value::String(id.clone()));
        }

        if let Err(e) = validate_animal(&candidate) {
            tracing::warn!(id = %id, code = %e.code(), field = %e.details().field, "animal rejected");
            return Err(StoreError::Validation(e));
        }

        let record = AnimalRecord::from_candidate(candidate).ok_or_else(|| {
            SchemaError::validation_failed(ValidationDetails::type_mismatch(
                "personalityTraits",
                "array of strings",
                "array with non-string elements",
            ))
        })?;

        self.records.push(record.clone());

        if let Err(e) = self.persistence.save(&self.records) {
            self.records.pop();
            tracing::error!(id = %id, severity = %e.severity(), error = %e, "mirror write failed, append rolled back");
            return Err(StoreError::Persistence(e));
        }

        tracing::info!(id = %record.id, name = %record.name, species = %record.species, "animal created");
        Ok(record)
    }
}
