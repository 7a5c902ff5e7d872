//! Storage trait and persisted envelope.

use crate::core::record::PreferenceRecord;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Version tag written into every persisted envelope. Envelopes carrying
/// any other value are treated as malformed and fall back to a fresh
/// default record.
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned, expiring envelope around the preference record.
///
/// `expires_at` is refreshed to `now + ttl` on every write, so the
/// record survives as long as the client keeps coming back (sliding
/// expiration).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    /// Schema version of the enclosed record.
    pub version: u32,

    /// When the record lapses unless rewritten.
    pub expires_at: DateTime<Utc>,

    /// The record itself.
    pub record: PreferenceRecord,
}

impl PersistedRecord {
    /// Wrap a record for storage, stamping a fresh expiration.
    #[must_use]
    pub fn wrap(record: PreferenceRecord, ttl: Duration) -> Self {
        Self {
            version: SCHEMA_VERSION,
            expires_at: Utc::now() + ttl,
            record,
        }
    }

    /// Whether the envelope has lapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Whether the envelope carries the schema version we write.
    #[must_use]
    pub fn is_current_version(&self) -> bool {
        self.version == SCHEMA_VERSION
    }
}

/// Storage backend for the preference record.
///
/// One record per backend; every tracking call is a full
/// read-modify-write cycle against it. Two processes sharing a backend
/// can interleave those cycles and the last writer wins — an accepted
/// limitation, not defended against.
pub trait PreferenceStore: Send + Sync {
    /// Whether a persistent store is actually present. Tracking calls
    /// silently no-op when this is false.
    fn is_available(&self) -> bool {
        true
    }

    /// Load the stored record. `Ok(None)` for a missing, expired, or
    /// unrecognized-version record.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value cannot be read or parsed.
    fn load(&self) -> Result<Option<PreferenceRecord>>;

    /// Persist the record, refreshing its expiration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn save(&self, record: &PreferenceRecord) -> Result<()>;

    /// Delete the stored record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn clear(&self) -> Result<()>;
}
