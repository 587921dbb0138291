//! Platform abstraction layer
//!
//! Collaborators the core consumes, with a browser implementation and an
//! in-memory one for native builds and tests:
//! - Storage (LocalStorage on web)
//! - Time (wall clock for timestamps)
//! - Input (keyboard key names)

pub mod input;
pub mod storage;
pub mod time;

pub use input::NavKey;
pub use storage::{KeyValueStore, MemoryStorage, StorageFailure};
pub use time::{Clock, ManualClock, SystemClock};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
