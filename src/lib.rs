//! shoptrack - preference tracking for the One Shop storefront.
//!
//! Records page visits, item views, tag clicks, and searches into a
//! single persisted record with a sliding 30-day expiration, and derives
//! a coarse personalization summary (top categories, top tags,
//! engagement level) from it.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
