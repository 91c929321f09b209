//! Storage subsystem for animaldb
//!
//! Holds the durable copy of the record sequence. The store talks to it only
//! through [`RecordPersistence`], so the file format can change without
//! touching filtering, validation or the mutation path.
//!
//! Guarantees:
//! - `save` replaces the whole persisted sequence
//! - `save` returns only after the data is synced to disk
//! - A mirror that cannot be parsed is reported, never reset

mod errors;
mod mirror;

pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use mirror::{render_document, JsonFileMirror, MemoryMirror, RecordPersistence};
