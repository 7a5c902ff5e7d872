//! `shoptrack tag` command implementation.

use crate::core::PreferenceTracker;
use crate::error::Result;

/// Run the tag command.
///
/// Records a tag click.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run(tag: &str) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);

    tracker.track_tag_click(tag)?;

    println!("Recorded click on tag '{tag}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::SessionConfig;
    use crate::core::PreferenceTracker;
    use crate::storage::MemoryBackend;

    #[test]
    fn tag_click_is_counted() {
        let store = MemoryBackend::new();
        let tracker = PreferenceTracker::new(&store, SessionConfig::default());

        tracker.track_tag_click("vegan").unwrap();
        tracker.track_tag_click("vegan").unwrap();

        assert_eq!(tracker.snapshot().clicked_tags.get("vegan"), Some(&2));
    }
}
