//! Repository layer for persisted settings.
//!
//! # Responsibility
//! - Define the key-value persistence contract used by settings stores.
//! - Isolate SQLite details from store orchestration.
//!
//! # Invariants
//! - Each key is written atomically; readers never see a partial value.
//! - Repository APIs return semantic errors in addition to DB transport errors.

pub mod kv_repo;
