//! `shoptrack show` command implementation.

use crate::error::Result;
use crate::storage::PreferenceStore;

/// Run the show command.
///
/// Dumps the raw stored record as pretty JSON.
///
/// # Errors
///
/// Returns an error if the storage backend fails or the stored value
/// cannot be parsed.
pub fn run() -> Result<()> {
    let (store, _config) = super::open_store()?;

    match store.load()? {
        Some(record) => {
            let json = serde_json::to_string_pretty(&record)?;
            println!("{json}");
        }
        None => println!("No tracking record found."),
    }

    Ok(())
}
