//! File-based storage backend.

use crate::core::record::PreferenceRecord;
use crate::error::Result;
use crate::storage::traits::{PersistedRecord, PreferenceStore};
use chrono::Duration;
use std::fs;
use std::path::PathBuf;

/// File-based storage backend with atomic writes.
///
/// The record lives in a single `<key>.json` file under the base
/// directory, wrapped in a versioned envelope whose expiration is
/// refreshed on every write.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
    key: String,
    ttl: Duration,
}

impl FileBackend {
    /// Create a new file backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be created.
    pub fn new(base_dir: PathBuf, key: &str, ttl_days: u32) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            key: key.to_string(),
            ttl: Duration::days(i64::from(ttl_days)),
        })
    }

    /// Get the path to the record file.
    fn record_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.key))
    }
}

impl PreferenceStore for FileBackend {
    fn load(&self) -> Result<Option<PreferenceRecord>> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let persisted: PersistedRecord = serde_json::from_str(&contents)?;
        if !persisted.is_current_version() || persisted.is_expired() {
            return Ok(None);
        }
        Ok(Some(persisted.record))
    }

    fn save(&self, record: &PreferenceRecord) -> Result<()> {
        let path = self.record_path();
        let temp = path.with_extension("tmp");

        // Write to temp file first
        let persisted = PersistedRecord::wrap(record.clone(), self.ttl);
        let contents = serde_json::to_string_pretty(&persisted)?;
        fs::write(&temp, &contents)?;

        // Atomic rename - prevents corruption if process crashes mid-write
        fs::rename(&temp, &path)?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.record_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
