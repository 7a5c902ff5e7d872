//! Personalization summary derived from the preference record.

use crate::core::record::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of top categories surfaced.
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Number of recently-viewed items surfaced.
pub const RECENTLY_VIEWED_COUNT: usize = 5;

/// Number of top tags surfaced.
pub const TOP_TAG_COUNT: usize = 5;

/// Number of recent searches surfaced.
pub const RECENT_SEARCH_COUNT: usize = 3;

/// Interaction totals above this are "high" engagement.
const HIGH_ENGAGEMENT_THRESHOLD: u64 = 50;

/// Interaction totals above this (and not high) are "medium".
const MEDIUM_ENGAGEMENT_THRESHOLD: u64 = 20;

/// Coarse three-bucket engagement classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    /// Interaction total of 20 or below.
    Low,

    /// Interaction total in 21..=50.
    Medium,

    /// Interaction total above 50.
    High,
}

impl EngagementLevel {
    /// Classify a summed interaction score.
    #[must_use]
    pub fn from_total(total: u64) -> Self {
        if total > HIGH_ENGAGEMENT_THRESHOLD {
            Self::High
        } else if total > MEDIUM_ENGAGEMENT_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Derived view consumed by "recommended for you" surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personalization {
    /// Up to 3 categories by descending preference score.
    pub top_categories: Vec<String>,

    /// Last 5 viewed item ids, newest last.
    pub recently_viewed: Vec<String>,

    /// Up to 5 tags by descending click count.
    pub top_tags: Vec<String>,

    /// Last 3 search terms, newest last.
    pub recent_searches: Vec<String>,

    /// Last explicit sort choice, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_sort_order: Option<String>,

    /// Last explicit price-range filter, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range_preference: Option<(f64, f64)>,

    /// Derived device string, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,

    /// Engagement bucket from the summed interaction score.
    pub engagement_level: EngagementLevel,

    /// True once more than one session has been detected.
    pub is_returning_user: bool,
}

/// Derive the personalization summary. Pure read: no store access, no
/// mutation.
#[must_use]
pub fn derive(record: &PreferenceRecord) -> Personalization {
    Personalization {
        top_categories: top_k(&record.category_preferences, TOP_CATEGORY_COUNT),
        recently_viewed: last_n(&record.viewed_items, RECENTLY_VIEWED_COUNT),
        top_tags: top_k(&record.clicked_tags, TOP_TAG_COUNT),
        recent_searches: last_n(&record.search_terms, RECENT_SEARCH_COUNT),
        preferred_sort_order: record.preferred_sort_order.clone(),
        price_range_preference: record.price_range_preference,
        device_info: record.device_info.clone(),
        engagement_level: EngagementLevel::from_total(record.interaction_total()),
        is_returning_user: record.session_count > 1,
    }
}

/// Top `k` keys by descending count. Equal counts break
/// lexicographically: the map iterates in key order and the sort is
/// stable.
fn top_k(counts: &BTreeMap<String, u64>, k: usize) -> Vec<String> {
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries.into_iter().take(k).map(|(key, _)| key.clone()).collect()
}

/// Last `n` entries in stored order, newest last.
fn last_n(items: &[String], n: usize) -> Vec<String> {
    let skip = items.len().saturating_sub(n);
    items[skip..].to_vec()
}
