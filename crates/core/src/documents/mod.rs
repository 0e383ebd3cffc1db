//! Documents module - registry of content-addressed campaign documents.

mod content_stores;
mod documents_model;
mod documents_service;
mod documents_traits;

#[cfg(test)]
mod documents_service_tests;

pub use content_stores::{GatewayContentStore, InMemoryContentStore, TieredContentStore};
pub use documents_model::{Document, DocumentSnapshot, DocumentType, NewDocument};
pub use documents_service::DocumentService;
pub use documents_traits::{ContentStore, DocumentServiceTrait};
