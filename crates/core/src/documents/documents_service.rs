use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::documents_model::{Document, DocumentSnapshot, DocumentType, NewDocument};
use super::documents_traits::{ContentStore, DocumentServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};

const ENTITY: &str = "Document";

/// Registry of uploaded documents backed by a [`ContentStore`].
pub struct DocumentService {
    content_store: Arc<dyn ContentStore>,
    documents: RwLock<Vec<Document>>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl DocumentService {
    pub fn new(content_store: Arc<dyn ContentStore>) -> Self {
        Self {
            content_store,
            documents: RwLock::new(Vec::new()),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Document>>> {
        self.documents
            .read()
            .map_err(|_| Error::lock_poisoned("Document registry"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Document>>> {
        self.documents
            .write()
            .map_err(|_| Error::lock_poisoned("Document registry"))
    }

    fn filtered<F>(&self, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(&Document) -> bool,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|d| predicate(d))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DocumentServiceTrait for DocumentService {
    async fn upload_document(
        &self,
        new_document: NewDocument,
        bytes: Vec<u8>,
    ) -> Result<Document> {
        new_document.validate()?;
        if bytes.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Document content cannot be empty".to_string(),
            )));
        }

        let size = bytes.len() as u64;
        let hash = self.content_store.put(bytes).await?;

        let document = Document {
            hash: hash.clone(),
            name: new_document.name,
            doc_type: new_document.doc_type,
            campaign_id: new_document.campaign_id,
            uploaded_by: new_document.uploaded_by,
            uploaded_at: Utc::now(),
            size,
            verified: false,
            verified_by: None,
            verified_at: None,
        };

        {
            let mut documents = self.write()?;
            if documents.iter().any(|d| d.hash == hash) {
                return Err(Error::duplicate(ENTITY, hash));
            }
            documents.push(document.clone());
        }

        debug!(
            "Registered {} document {} ({} bytes)",
            document.doc_type, document.hash, document.size
        );
        self.event_sink
            .emit(DomainEvent::documents_changed(vec![document.hash.clone()]));
        Ok(document)
    }

    fn get_document(&self, hash: &str) -> Result<Option<Document>> {
        Ok(self.read()?.iter().find(|d| d.hash == hash).cloned())
    }

    async fn document_content(&self, hash: &str) -> Result<Vec<u8>> {
        if self.get_document(hash)?.is_none() {
            return Err(Error::not_found(ENTITY, hash));
        }
        Ok(self.content_store.fetch(hash).await?)
    }

    fn verify_document(&self, hash: &str, verified_by: &str) -> Result<Document> {
        if verified_by.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "verifiedBy".to_string(),
            )));
        }

        let verified = {
            let mut documents = self.write()?;
            let document = documents
                .iter_mut()
                .find(|d| d.hash == hash)
                .ok_or_else(|| Error::not_found(ENTITY, hash))?;
            document.verified = true;
            document.verified_by = Some(verified_by.to_string());
            document.verified_at = Some(Utc::now());
            document.clone()
        };

        self.event_sink
            .emit(DomainEvent::documents_changed(vec![hash.to_string()]));
        Ok(verified)
    }

    fn documents_by_type(&self, doc_type: DocumentType) -> Result<Vec<Document>> {
        self.filtered(|d| d.doc_type == doc_type)
    }

    fn documents_by_campaign(&self, campaign_id: &str) -> Result<Vec<Document>> {
        self.filtered(|d| d.campaign_id == campaign_id)
    }

    fn list_documents(&self) -> Result<Vec<Document>> {
        Ok(self.read()?.clone())
    }

    fn snapshot(&self) -> Result<DocumentSnapshot> {
        Ok(DocumentSnapshot {
            documents: self.list_documents()?,
        })
    }

    fn restore(&self, snapshot: DocumentSnapshot) -> Result<()> {
        *self.write()? = snapshot.documents;
        Ok(())
    }
}
