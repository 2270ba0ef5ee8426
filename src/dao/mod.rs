//! Persistence layer: the stats store trait, its document model and the
//! concrete stores.

/// Stats file backed by a single JSON document on disk.
pub mod json_file;
/// In-memory store for tests and ephemeral deployments.
pub mod memory;
/// Persisted document definitions.
pub mod models;
/// Storage abstraction layer.
pub mod storage;
