//! Storage backends for the preference record.

pub mod file;
pub mod memory;
pub mod null;
pub mod traits;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use null::NullBackend;
pub use traits::{PersistedRecord, PreferenceStore, SCHEMA_VERSION};
