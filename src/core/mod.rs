//! Core types and tracking logic.

pub mod device;
pub mod personalization;
pub mod record;
pub mod tracker;

pub use personalization::{EngagementLevel, Personalization};
pub use record::{InteractionKind, PreferenceRecord, SEARCH_TERMS_CAP, VIEWED_ITEMS_CAP};
pub use tracker::PreferenceTracker;
