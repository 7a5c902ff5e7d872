//! `shoptrack summary` command implementation.

use crate::core::{EngagementLevel, PreferenceTracker};
use crate::error::Result;

/// Run the summary command.
///
/// Shows the derived personalization view, as text or JSON.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn run(json: bool) -> Result<()> {
    let (store, config) = super::open_store()?;
    let tracker = PreferenceTracker::new(&store, config.session);
    let summary = tracker.personalization();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Personalization summary");
    println!("{}", "─".repeat(60));
    println!("{:<17} {}", "Engagement:", level_label(summary.engagement_level));
    println!(
        "{:<17} {}",
        "Returning user:",
        if summary.is_returning_user { "yes" } else { "no" }
    );
    println!("{:<17} {}", "Top categories:", format_list(&summary.top_categories));
    println!("{:<17} {}", "Top tags:", format_list(&summary.top_tags));
    println!("{:<17} {}", "Recently viewed:", format_list(&summary.recently_viewed));
    println!("{:<17} {}", "Recent searches:", format_list(&summary.recent_searches));
    println!(
        "{:<17} {}",
        "Sort order:",
        summary.preferred_sort_order.as_deref().unwrap_or("(none)")
    );
    println!(
        "{:<17} {}",
        "Price range:",
        format_price(summary.price_range_preference)
    );
    println!(
        "{:<17} {}",
        "Device:",
        summary.device_info.as_deref().unwrap_or("(unknown)")
    );

    Ok(())
}

fn level_label(level: EngagementLevel) -> &'static str {
    match level {
        EngagementLevel::Low => "low",
        EngagementLevel::Medium => "medium",
        EngagementLevel::High => "high",
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn format_price(range: Option<(f64, f64)>) -> String {
    range.map_or_else(|| "(none)".to_string(), |(min, max)| format!("{min}-{max}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::core::PreferenceTracker;
    use crate::storage::MemoryBackend;

    #[test]
    fn format_list_joins_entries() {
        let items = vec!["cars".to_string(), "travel".to_string()];
        assert_eq!(format_list(&items), "cars, travel");
    }

    #[test]
    fn format_list_handles_empty() {
        assert_eq!(format_list(&[]), "(none)");
    }

    #[test]
    fn format_price_renders_range() {
        assert_eq!(format_price(Some((50.0, 200.0))), "50-200");
        assert_eq!(format_price(None), "(none)");
    }

    #[test]
    fn level_labels() {
        assert_eq!(level_label(EngagementLevel::Low), "low");
        assert_eq!(level_label(EngagementLevel::Medium), "medium");
        assert_eq!(level_label(EngagementLevel::High), "high");
    }

    #[test]
    fn summary_json_shape() {
        let store = MemoryBackend::new();
        let tracker = PreferenceTracker::new(&store, SessionConfig::default());
        tracker.track_page_visit("finance").unwrap();

        let summary = tracker.personalization();
        let json = serde_json::to_string_pretty(&summary).unwrap();
        assert!(json.contains("\"topCategories\""));
        assert!(json.contains("finance"));
    }
}
