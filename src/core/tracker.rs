//! Tracking operations over the preference record.
//!
//! Every mutator runs a full read-modify-write cycle against the store:
//! load the record (or start a fresh one), apply the event, persist.
//! A store that reports itself unavailable turns every call into a
//! silent no-op.

use crate::config::SessionConfig;
use crate::core::device;
use crate::core::personalization::{self, Personalization};
use crate::core::record::{InteractionKind, PreferenceRecord};
use crate::error::Result;
use crate::storage::PreferenceStore;
use chrono::{DateTime, Utc};

/// Category weight of a plain page visit.
const PAGE_VISIT_WEIGHT: u64 = 1;

/// Category weight of an item view. Item views count double toward
/// category preference.
const ITEM_VIEW_WEIGHT: u64 = 2;

/// Tracker over a single preference record.
pub struct PreferenceTracker<'a> {
    store: &'a dyn PreferenceStore,
    session: SessionConfig,
}

impl<'a> PreferenceTracker<'a> {
    /// Create a tracker over the given store.
    #[must_use]
    pub fn new(store: &'a dyn PreferenceStore, session: SessionConfig) -> Self {
        Self { store, session }
    }

    /// Current record as stored, or a fresh default when the record is
    /// absent, expired, or unreadable.
    #[must_use]
    pub fn snapshot(&self) -> PreferenceRecord {
        self.store.load().ok().flatten().unwrap_or_default()
    }

    /// Record a page visit.
    ///
    /// The coarse category is the page identifier up to the first `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_page_visit(&self, page: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();
        let now = Utc::now();

        *record.page_visits.entry(page.to_string()).or_insert(0) += 1;
        record.total_visits += 1;
        record.last_visit = now;

        let category = page.split('/').next().unwrap_or(page);
        *record
            .category_preferences
            .entry(category.to_string())
            .or_insert(0) += PAGE_VISIT_WEIGHT;

        record.bump_interaction(InteractionKind::Browsing);
        record.last_interaction_timestamp = Some(now);
        self.store.save(&record)
    }

    /// Record an item detail view.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_item_view(&self, item_id: &str, category: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();

        record.note_viewed(item_id);
        *record
            .category_preferences
            .entry(category.to_string())
            .or_insert(0) += ITEM_VIEW_WEIGHT;

        record.bump_interaction(InteractionKind::ItemViewing);
        record.last_interaction_timestamp = Some(Utc::now());
        self.store.save(&record)
    }

    /// Record a tag click.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_tag_click(&self, tag: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();

        *record.clicked_tags.entry(tag.to_string()).or_insert(0) += 1;
        record.bump_interaction(InteractionKind::TagInteraction);
        record.last_interaction_timestamp = Some(Utc::now());
        self.store.save(&record)
    }

    /// Record a search.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_search(&self, term: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();

        record.note_search(term);
        record.bump_interaction(InteractionKind::Searching);
        record.last_interaction_timestamp = Some(Utc::now());
        self.store.save(&record)
    }

    /// Record the last explicit sort choice.
    ///
    /// Passive preference snapshot: no interaction score, no
    /// last-interaction update.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_sort_preference(&self, order: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();
        record.preferred_sort_order = Some(order.to_string());
        self.store.save(&record)
    }

    /// Record the last explicit price-range filter.
    ///
    /// Passive preference snapshot, like
    /// [`Self::track_sort_preference`].
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_price_range(&self, min: f64, max: f64) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();
        record.price_range_preference = Some((min, max));
        self.store.save(&record)
    }

    /// Classify and store the client's device string. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn track_device_info(&self, user_agent: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();
        record.device_info = Some(device::classify(user_agent));
        self.store.save(&record)
    }

    /// Start a new session.
    ///
    /// The gap since the last interaction stands in for the previous
    /// session's duration and is folded into the running average when
    /// it lies strictly inside `(0, max_duration_minutes)`. Gaps
    /// outside that window are discarded but still advance the session
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn start_new_session(&self) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut record = self.snapshot();
        let now = Utc::now();

        record.session_count += 1;

        if let Some(previous) = record.last_interaction_timestamp {
            let elapsed = minutes_between(previous, now);
            if elapsed > 0.0 && elapsed < f64::from(self.session.max_duration_minutes) {
                // Running mean over completed sessions; discarded gaps
                // still advance the divisor on later folds.
                let completed = f64::from(record.session_count - 1);
                let prior = record.average_session_duration.unwrap_or(0.0);
                record.average_session_duration =
                    Some((prior * (completed - 1.0) + elapsed) / completed);
            }
        }

        record.last_interaction_timestamp = Some(now);
        self.store.save(&record)
    }

    /// Composite page-load entry point: track the visit, classify the
    /// device when a user agent is supplied, and start a new session if
    /// the client had been idle past the configured gap.
    ///
    /// The idle gap is measured against the last-interaction timestamp
    /// as it stood before this visit overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated record fails.
    pub fn record_visit(&self, page: &str, user_agent: Option<&str>) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let prior_interaction = self.snapshot().last_interaction_timestamp;

        self.track_page_visit(page)?;
        if let Some(ua) = user_agent {
            self.track_device_info(ua)?;
        }

        if let Some(previous) = prior_interaction {
            let idle = minutes_between(previous, Utc::now());
            if idle > f64::from(self.session.idle_gap_minutes) {
                self.start_new_session()?;
            }
        }

        Ok(())
    }

    /// Derive the personalization summary. Pure read, no store write.
    #[must_use]
    pub fn personalization(&self) -> Personalization {
        personalization::derive(&self.snapshot())
    }

    /// Delete the persisted record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    pub fn clear(&self) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        self.store.clear()
    }
}

/// Minutes between two instants, at second precision.
fn minutes_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let seconds = (later - earlier).num_seconds() as f64;
    seconds / 60.0
}
