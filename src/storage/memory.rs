//! In-memory storage backend for testing.

use crate::core::record::PreferenceRecord;
use crate::error::Result;
use crate::storage::traits::{PersistedRecord, PreferenceStore};
use chrono::Duration;
use std::sync::RwLock;

/// In-memory storage backend for testing.
///
/// Honors the same envelope semantics as the file backend, including
/// the sliding expiration.
#[derive(Debug)]
pub struct MemoryBackend {
    ttl: Duration,
    slot: RwLock<Option<PersistedRecord>>,
}

impl MemoryBackend {
    /// Create a new in-memory backend with the default 30-day TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl_days(30)
    }

    /// Create a new in-memory backend with a custom TTL.
    #[must_use]
    pub fn with_ttl_days(ttl_days: u32) -> Self {
        Self {
            ttl: Duration::days(i64::from(ttl_days)),
            slot: RwLock::new(None),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryBackend {
    fn load(&self) -> Result<Option<PreferenceRecord>> {
        let slot = self.slot.read().unwrap();
        match slot.as_ref() {
            Some(persisted) if persisted.is_current_version() && !persisted.is_expired() => {
                Ok(Some(persisted.record.clone()))
            }
            _ => Ok(None),
        }
    }

    fn save(&self, record: &PreferenceRecord) -> Result<()> {
        let mut slot = self.slot.write().unwrap();
        *slot = Some(PersistedRecord::wrap(record.clone(), self.ttl));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self.slot.write().unwrap();
        *slot = None;
        Ok(())
    }
}
