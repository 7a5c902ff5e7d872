//! `shoptrack view` command implementation.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the view command.
///
/// Records an item detail view under the given category.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run(item_id: &str, category: &str) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.track_item_view(item_id, category)?;

    println!("Recorded view of '{item_id}' ({category}).");
    Ok(())
}
