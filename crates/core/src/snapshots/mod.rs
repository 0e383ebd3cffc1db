//! Snapshots module - versioned persistence of in-memory service state.

mod snapshots_model;
mod snapshots_service;
mod snapshots_traits;

#[cfg(test)]
mod snapshots_service_tests;

pub use snapshots_model::{SnapshotEnvelope, SnapshotKey};
pub use snapshots_service::SnapshotService;
pub use snapshots_traits::SnapshotStore;
