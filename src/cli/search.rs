//! `shoptrack search` command implementation.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the search command.
///
/// Records a search term.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run(term: &str) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.track_search(term)?;

    println!("Recorded search for '{term}'.");
    Ok(())
}
