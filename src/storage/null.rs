//! Null backend for environments without persistent storage.

use crate::core::record::PreferenceRecord;
use crate::error::Result;
use crate::storage::traits::PreferenceStore;

/// Backend standing in for "no persistent store available".
///
/// Reports itself unavailable so tracking calls no-op instead of
/// erroring; reads always come back absent and writes are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NullBackend {
    /// Create a new null backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceStore for NullBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn load(&self) -> Result<Option<PreferenceRecord>> {
        Ok(None)
    }

    fn save(&self, _record: &PreferenceRecord) -> Result<()> {
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_unavailable() {
        assert!(!NullBackend::new().is_available());
    }

    #[test]
    fn writes_are_discarded() {
        let store = NullBackend::new();
        store.save(&PreferenceRecord::new()).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_is_a_no_op() {
        let store = NullBackend::new();
        store.clear().unwrap();
        store.clear().unwrap();
    }
}
