//! `shoptrack clear` command implementation.

use crate::error::Result;
use crate::storage::PreferenceStore;

/// Run the clear command.
///
/// Deletes the stored record. Idempotent.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run() -> Result<()> {
    let (store, _config) = super::open_store()?;

    store.clear()?;

    println!("Tracking record cleared.");
    Ok(())
}
