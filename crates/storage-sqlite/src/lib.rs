//! SQLite storage implementation for Karuna.
//!
//! This crate provides the database-related functionality using Diesel ORM with SQLite.
//! It implements the `SnapshotStore` trait defined in `karuna-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single writer actor that serializes all writes
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!     core (domain)
//!           │
//!           ▼
//!  storage-sqlite (this crate)
//!           │
//!           ▼
//!       SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod snapshots;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use snapshots::SqliteSnapshotStore;

// Re-export from karuna-core for convenience
pub use karuna_core::errors::{DatabaseError, Error, Result};
