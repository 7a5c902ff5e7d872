//! `shoptrack session` command implementation.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the session command.
///
/// Forces a session boundary, folding the idle gap into the running
/// average when it qualifies.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run() -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.start_new_session()?;

    let record = tracker.snapshot();
    println!("Started session #{}.", record.session_count);
    Ok(())
}
