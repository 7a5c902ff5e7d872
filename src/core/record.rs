//! The persisted preference record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of viewed item ids retained (oldest evicted first).
pub const VIEWED_ITEMS_CAP: usize = 20;

/// Maximum number of search terms retained (oldest evicted first).
pub const SEARCH_TERMS_CAP: usize = 10;

/// Interaction categories tallied in the record.
///
/// Serialized as the wire strings the storefront always used
/// (`browsing`, `itemViewing`, `tagInteraction`, `searching`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    /// Page navigation.
    Browsing,

    /// Opening an item detail view.
    ItemViewing,

    /// Clicking a tag chip.
    TagInteraction,

    /// Submitting a search.
    Searching,
}

/// The single per-client preference record.
///
/// Field names serialize as camelCase to match the record shape the
/// storefront has always persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    /// Visit count per page identifier.
    pub page_visits: BTreeMap<String, u64>,

    /// Sum of all page visits ever recorded (kept in lockstep, not
    /// recomputed from `page_visits`).
    pub total_visits: u64,

    /// Set once, at record creation.
    pub first_visit: DateTime<Utc>,

    /// Updated on every page visit.
    pub last_visit: DateTime<Utc>,

    /// Weighted interest score per category (visit = 1, item view = 2).
    pub category_preferences: BTreeMap<String, u64>,

    /// Most-recently-viewed item ids, de-duplicated, oldest evicted.
    pub viewed_items: Vec<String>,

    /// Click count per tag.
    pub clicked_tags: BTreeMap<String, u64>,

    /// Most-recent search strings, not de-duplicated.
    pub search_terms: Vec<String>,

    /// Counters per interaction kind.
    pub interaction_score: BTreeMap<InteractionKind, u64>,

    /// Last explicit sort choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_sort_order: Option<String>,

    /// Last explicit price-range filter, as (min, max).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range_preference: Option<(f64, f64)>,

    /// Derived "Mobile/Desktop, BrowserName" string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,

    /// Detected session count. Starts at 1, never decremented.
    pub session_count: u32,

    /// Running average of qualifying inter-session gaps, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_session_duration: Option<f64>,

    /// Updated on every tracked engagement event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction_timestamp: Option<DateTime<Utc>>,
}

impl PreferenceRecord {
    /// Create a fresh default record with both timestamps set to now.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            page_visits: BTreeMap::new(),
            total_visits: 0,
            first_visit: now,
            last_visit: now,
            category_preferences: BTreeMap::new(),
            viewed_items: Vec::new(),
            clicked_tags: BTreeMap::new(),
            search_terms: Vec::new(),
            interaction_score: BTreeMap::new(),
            preferred_sort_order: None,
            price_range_preference: None,
            device_info: None,
            session_count: 1,
            average_session_duration: None,
            last_interaction_timestamp: None,
        }
    }

    /// Remember a viewed item. Already-seen ids are left in place (no
    /// reordering); otherwise the id is appended and the oldest entries
    /// are evicted down to [`VIEWED_ITEMS_CAP`].
    pub fn note_viewed(&mut self, item_id: &str) {
        if self.viewed_items.iter().any(|i| i == item_id) {
            return;
        }
        self.viewed_items.push(item_id.to_string());
        if self.viewed_items.len() > VIEWED_ITEMS_CAP {
            let excess = self.viewed_items.len() - VIEWED_ITEMS_CAP;
            self.viewed_items.drain(..excess);
        }
    }

    /// Remember a search term. Duplicates are kept; the oldest entries
    /// are evicted down to [`SEARCH_TERMS_CAP`].
    pub fn note_search(&mut self, term: &str) {
        self.search_terms.push(term.to_string());
        if self.search_terms.len() > SEARCH_TERMS_CAP {
            let excess = self.search_terms.len() - SEARCH_TERMS_CAP;
            self.search_terms.drain(..excess);
        }
    }

    /// Increment the counter for one interaction kind.
    pub fn bump_interaction(&mut self, kind: InteractionKind) {
        *self.interaction_score.entry(kind).or_insert(0) += 1;
    }

    /// Sum of all interaction counters.
    #[must_use]
    pub fn interaction_total(&self) -> u64 {
        self.interaction_score.values().sum()
    }
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_record_defaults() {
        let record = PreferenceRecord::new();
        assert_eq!(record.total_visits, 0);
        assert_eq!(record.session_count, 1);
        assert!(record.page_visits.is_empty());
        assert!(record.viewed_items.is_empty());
        assert!(record.search_terms.is_empty());
        assert!(record.preferred_sort_order.is_none());
        assert!(record.average_session_duration.is_none());
        assert!(record.last_interaction_timestamp.is_none());
        assert_eq!(record.first_visit, record.last_visit);
    }

    #[test]
    fn serializes_camel_case_keys() {
        let record = PreferenceRecord::new();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"pageVisits\""));
        assert!(json.contains("\"totalVisits\""));
        assert!(json.contains("\"categoryPreferences\""));
        assert!(json.contains("\"sessionCount\""));
        // Absent optionals are omitted entirely
        assert!(!json.contains("preferredSortOrder"));
        assert!(!json.contains("averageSessionDuration"));
    }

    #[test]
    fn interaction_kind_wire_strings() {
        assert_eq!(
            serde_json::to_string(&InteractionKind::Browsing).unwrap(),
            r#""browsing""#
        );
        assert_eq!(
            serde_json::to_string(&InteractionKind::ItemViewing).unwrap(),
            r#""itemViewing""#
        );
        assert_eq!(
            serde_json::to_string(&InteractionKind::TagInteraction).unwrap(),
            r#""tagInteraction""#
        );
        assert_eq!(
            serde_json::to_string(&InteractionKind::Searching).unwrap(),
            r#""searching""#
        );
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let mut record = PreferenceRecord::new();
        record.page_visits.insert("cars".to_string(), 3);
        record.total_visits = 3;
        record
            .category_preferences
            .insert("cars".to_string(), 5);
        record.note_viewed("car-42");
        record.clicked_tags.insert("suv".to_string(), 2);
        record.note_search("family car");
        record.bump_interaction(InteractionKind::Browsing);
        record.bump_interaction(InteractionKind::Searching);
        record.preferred_sort_order = Some("price-asc".to_string());
        record.price_range_preference = Some((100.0, 5000.0));
        record.device_info = Some("Desktop, Chrome".to_string());
        record.session_count = 4;
        record.average_session_duration = Some(12.5);
        record.last_interaction_timestamp = Some(Utc::now());

        let json = serde_json::to_string(&record).unwrap();
        let parsed: PreferenceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn round_trip_with_absent_optionals() {
        let record = PreferenceRecord::new();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PreferenceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.price_range_preference.is_none());
        assert!(parsed.device_info.is_none());
    }

    #[test]
    fn note_viewed_deduplicates() {
        let mut record = PreferenceRecord::new();
        record.note_viewed("item-1");
        record.note_viewed("item-1");
        assert_eq!(record.viewed_items, vec!["item-1"]);
    }

    #[test]
    fn note_viewed_evicts_oldest() {
        let mut record = PreferenceRecord::new();
        for i in 1..=25 {
            record.note_viewed(&format!("item-{i}"));
        }
        assert_eq!(record.viewed_items.len(), VIEWED_ITEMS_CAP);
        assert_eq!(record.viewed_items.first().unwrap(), "item-6");
        assert_eq!(record.viewed_items.last().unwrap(), "item-25");
    }

    #[test]
    fn note_search_keeps_duplicates() {
        let mut record = PreferenceRecord::new();
        record.note_search("shoes");
        record.note_search("shoes");
        record.note_search("shoes");
        assert_eq!(record.search_terms, vec!["shoes", "shoes", "shoes"]);
    }

    #[test]
    fn note_search_evicts_oldest() {
        let mut record = PreferenceRecord::new();
        for i in 1..=12 {
            record.note_search(&format!("term-{i}"));
        }
        assert_eq!(record.search_terms.len(), SEARCH_TERMS_CAP);
        assert_eq!(record.search_terms.first().unwrap(), "term-3");
        assert_eq!(record.search_terms.last().unwrap(), "term-12");
    }

    #[test]
    fn interaction_total_sums_all_kinds() {
        let mut record = PreferenceRecord::new();
        record.bump_interaction(InteractionKind::Browsing);
        record.bump_interaction(InteractionKind::Browsing);
        record.bump_interaction(InteractionKind::TagInteraction);
        assert_eq!(record.interaction_total(), 3);
    }

    proptest! {
        #[test]
        fn viewed_items_bounded_and_unique(ids in proptest::collection::vec("[a-z]{1,6}", 0..100)) {
            let mut record = PreferenceRecord::new();
            for id in &ids {
                record.note_viewed(id);
            }
            prop_assert!(record.viewed_items.len() <= VIEWED_ITEMS_CAP);
            let mut seen = std::collections::HashSet::new();
            prop_assert!(record.viewed_items.iter().all(|i| seen.insert(i.clone())));
        }

        #[test]
        fn search_terms_keep_newest(terms in proptest::collection::vec("[a-z]{1,6}", 0..50)) {
            let mut record = PreferenceRecord::new();
            for term in &terms {
                record.note_search(term);
            }
            prop_assert!(record.search_terms.len() <= SEARCH_TERMS_CAP);
            let tail: Vec<String> = terms
                .iter()
                .rev()
                .take(SEARCH_TERMS_CAP)
                .rev()
                .cloned()
                .collect();
            prop_assert_eq!(&record.search_terms, &tail);
        }
    }
}
