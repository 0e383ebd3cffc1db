//! Karuna Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic behind the Karuna donation platform:
//! the campaign catalog, the donation ledger, the derived display metrics, and
//! the wallet / content-storage / snapshot seams. It is storage-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate and by the
//! server runtime.

pub mod campaigns;
pub mod constants;
pub mod documents;
pub mod donations;
pub mod errors;
pub mod events;
pub mod metrics;
pub mod snapshots;
pub mod utils;
pub mod web3;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
