//! SQLite storage implementation for state snapshots.

mod model;
mod repository;

pub use model::AppSnapshotDB;
pub use repository::SqliteSnapshotStore;

// Re-export trait from core for convenience
pub use karuna_core::snapshots::SnapshotStore;
