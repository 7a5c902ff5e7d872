//! `shoptrack sort` and `shoptrack price` command implementations.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the sort command.
///
/// Records the last explicit sort choice.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run_sort(order: &str) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.track_sort_preference(order)?;

    println!("Recorded sort preference '{order}'.");
    Ok(())
}

/// Run the price command.
///
/// Records the last explicit price-range filter.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run_price(min: f64, max: f64) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.track_price_range(min, max)?;

    println!("Recorded price range {min}-{max}.");
    Ok(())
}
