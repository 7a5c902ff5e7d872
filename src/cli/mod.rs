//! CLI command implementations.

pub mod clear;
pub mod device;
pub mod prefer;
pub mod search;
pub mod session;
pub mod show;
pub mod summary;
pub mod tag;
pub mod view;
pub mod visit;

use crate::config::{self, Config};
use crate::error::Result;
use crate::storage::FileBackend;
use std::env;

/// Open the file-backed store named by the loaded configuration.
pub(crate) fn open_store() -> Result<(FileBackend, Config)> {
    let config = config::load_config()?;
    let store = FileBackend::new(
        config.storage.path.clone(),
        &config.record.key,
        config.record.ttl_days,
    )?;
    Ok((store, config))
}

/// Resolve a user-agent string from a flag, falling back to the
/// `SHOPTRACK_USER_AGENT` environment variable.
pub(crate) fn resolve_user_agent(flag: Option<String>) -> Option<String> {
    flag.or_else(|| env::var("SHOPTRACK_USER_AGENT").ok())
}
