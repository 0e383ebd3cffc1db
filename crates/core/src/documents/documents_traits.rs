use async_trait::async_trait;

use super::documents_model::{Document, DocumentSnapshot, DocumentType, NewDocument};
use crate::errors::{ProviderError, Result};

/// Content-addressed blob storage (an IPFS node or gateway).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Stores `bytes` and returns their content hash.
    async fn put(&self, bytes: Vec<u8>) -> std::result::Result<String, ProviderError>;

    async fn fetch(&self, hash: &str) -> std::result::Result<Vec<u8>, ProviderError>;
}

#[async_trait]
pub trait DocumentServiceTrait: Send + Sync {
    async fn upload_document(&self, new_document: NewDocument, bytes: Vec<u8>)
        -> Result<Document>;

    fn get_document(&self, hash: &str) -> Result<Option<Document>>;

    /// Raw content of a registered document.
    async fn document_content(&self, hash: &str) -> Result<Vec<u8>>;

    fn verify_document(&self, hash: &str, verified_by: &str) -> Result<Document>;

    fn documents_by_type(&self, doc_type: DocumentType) -> Result<Vec<Document>>;

    fn documents_by_campaign(&self, campaign_id: &str) -> Result<Vec<Document>>;

    fn list_documents(&self) -> Result<Vec<Document>>;

    fn snapshot(&self) -> Result<DocumentSnapshot>;

    fn restore(&self, snapshot: DocumentSnapshot) -> Result<()>;
}
