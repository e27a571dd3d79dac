// Adapters layer: concrete implementations of the domain ports.
// File-backed storage lives in config::cli next to the CLI that configures it.

pub mod document;
pub mod storage;

pub use document::{DocumentAttributes, MemoryDocument};
pub use storage::MemoryStorage;
