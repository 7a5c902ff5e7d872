//! `shoptrack device` command implementation.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the device command.
///
/// Classifies the user agent and stores the derived device string.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run(user_agent: Option<String>) -> Result<()> {
    let Some(user_agent) = super::resolve_user_agent(user_agent) else {
        println!("No user agent available (pass --user-agent or set SHOPTRACK_USER_AGENT).");
        return Ok(());
    };

    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.track_device_info(&user_agent)?;

    let record = tracker.snapshot();
    match record.device_info {
        Some(info) => println!("Recorded device: {info}"),
        None => println!("Device info not stored."),
    }
    Ok(())
}
