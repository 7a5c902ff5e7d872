//! `shoptrack visit` command implementation.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the visit command.
///
/// The page-load entry point: records the visit, classifies the device
/// when a user agent is known, and starts a new session after a long
/// idle gap.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run(page: &str, user_agent: Option<String>) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    let user_agent = super::resolve_user_agent(user_agent);
    tracker.record_visit(page, user_agent.as_deref())?;

    println!("Recorded visit to '{page}'.");
    Ok(())
}
