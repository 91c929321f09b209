//! Persisted mirror of the record sequence
//!
//! The mirror is a single JSON document of the form `{"animals": [...]}`.
//! Every save rewrites the whole document, so one insert costs
//! O(total records) of I/O. That ceiling is accepted for the dataset sizes
//! this store targets; the overwrite contract must stay as is.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::errors::{StorageError, StorageResult};
use crate::record::AnimalRecord;

/// Load/save seam between the store and its durable copy.
///
/// `save` always receives the full sequence, never a diff.
pub trait RecordPersistence: Send + Sync {
    /// Read every persisted record, in order
    fn load(&self) -> StorageResult<Vec<AnimalRecord>>;

    /// Replace the persisted copy with `records`
    fn save(&self, records: &[AnimalRecord]) -> StorageResult<()>;
}

#[derive(Deserialize)]
struct MirrorDocument {
    animals: Vec<AnimalRecord>,
}

#[derive(Serialize)]
struct MirrorDocumentRef<'a> {
    animals: &'a [AnimalRecord],
}

/// Renders the mirror document: 2-space indentation, no trailing newline.
pub fn render_document(records: &[AnimalRecord]) -> StorageResult<String> {
    serde_json::to_string_pretty(&MirrorDocumentRef { animals: records }).map_err(|e| {
        StorageError::write_failed_no_source(format!("Failed to serialize records: {}", e))
    })
}

/// JSON file on disk holding the whole record sequence.
#[derive(Debug, Clone)]
pub struct JsonFileMirror {
    path: PathBuf,
}

impl JsonFileMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the mirror file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the mirror file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Creates an empty mirror document, including parent directories.
    pub fn initialize(&self) -> StorageResult<()> {
        self.save(&[])
    }

    fn ensure_parent_dir(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::write_failed(
                        format!("Failed to create data directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }
        Ok(())
    }
}

impl RecordPersistence for JsonFileMirror {
    /// A missing file is an empty store; unparseable contents are corruption.
    fn load(&self) -> StorageResult<Vec<AnimalRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::read_failed(
                    format!("Failed to read mirror: {}", self.path.display()),
                    e,
                ))
            }
        };

        let document: MirrorDocument = serde_json::from_str(&contents).map_err(|e| {
            StorageError::corruption(format!(
                "Mirror {} is not a valid animals document: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(document.animals)
    }

    fn save(&self, records: &[AnimalRecord]) -> StorageResult<()> {
        let rendered = render_document(records)?;
        self.ensure_parent_dir()?;

        let mut file = File::create(&self.path).map_err(|e| {
            StorageError::write_failed(
                format!("Failed to open mirror: {}", self.path.display()),
                e,
            )
        })?;

        file.write_all(rendered.as_bytes())
            .map_err(|e| StorageError::write_failed("Failed to write mirror", e))?;

        file.sync_all()
            .map_err(|e| StorageError::write_failed("Failed to sync mirror", e))?;

        Ok(())
    }
}

/// In-memory persistence, used by tests.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// store. `fail_saves` makes every subsequent save fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryMirror {
    saved: Arc<Mutex<Vec<AnimalRecord>>>,
    save_count: Arc<Mutex<usize>>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror pre-populated with `records`
    pub fn with_records(records: Vec<AnimalRecord>) -> Self {
        let mirror = Self::default();
        *mirror.saved.lock().unwrap_or_else(|e| e.into_inner()) = records;
        mirror
    }

    /// Toggle save failure injection
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the last saved sequence
    pub fn snapshot(&self) -> Vec<AnimalRecord> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordPersistence for MemoryMirror {
    fn load(&self) -> StorageResult<Vec<AnimalRecord>> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[AnimalRecord]) -> StorageResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::write_failed_no_source("injected save failure"));
        }
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = records.to_vec();
        *self.save_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
