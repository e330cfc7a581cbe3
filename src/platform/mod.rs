//! Platform abstraction layer
//!
//! Handles browser/native differences for storage:
//! - LocalStorage on web
//! - A JSON file in the user's data directory on native
//! - In-memory for tests and as a fallback

#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
#[cfg(target_arch = "wasm32")]
pub mod local_store;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_store::LocalStore;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
