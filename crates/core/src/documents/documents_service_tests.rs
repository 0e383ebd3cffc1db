use std::sync::Arc;

use crate::documents::*;
use crate::errors::{Error, ProviderError};
use crate::events::{DomainEvent, MockDomainEventSink};

fn new_document(name: &str, doc_type: DocumentType, campaign_id: &str) -> NewDocument {
    NewDocument {
        name: name.to_string(),
        doc_type,
        campaign_id: campaign_id.to_string(),
        uploaded_by: "field-officer".to_string(),
    }
}

fn service() -> DocumentService {
    DocumentService::new(Arc::new(InMemoryContentStore::new()))
}

#[tokio::test]
async fn test_upload_registers_unverified_document() {
    let service = service();
    let document = service
        .upload_document(
            new_document("receipt.pdf", DocumentType::Receipt, "3"),
            b"%PDF-1.4 receipt".to_vec(),
        )
        .await
        .unwrap();

    assert_eq!(document.hash, InMemoryContentStore::hash_of(b"%PDF-1.4 receipt"));
    assert_eq!(document.size, 16);
    assert!(!document.verified);
    assert_eq!(service.get_document(&document.hash).unwrap(), Some(document.clone()));
    assert_eq!(
        service.document_content(&document.hash).await.unwrap(),
        b"%PDF-1.4 receipt".to_vec()
    );
}

#[tokio::test]
async fn test_upload_validation_and_duplicates() {
    let service = service();
    assert!(matches!(
        service
            .upload_document(new_document(" ", DocumentType::Proof, "1"), b"x".to_vec())
            .await
            .unwrap_err(),
        Error::Validation(_)
    ));
    assert!(matches!(
        service
            .upload_document(new_document("empty.txt", DocumentType::Proof, "1"), Vec::new())
            .await
            .unwrap_err(),
        Error::Validation(_)
    ));

    service
        .upload_document(new_document("a.png", DocumentType::Proof, "1"), b"same".to_vec())
        .await
        .unwrap();
    assert!(matches!(
        service
            .upload_document(new_document("b.png", DocumentType::Proof, "2"), b"same".to_vec())
            .await
            .unwrap_err(),
        Error::DuplicateId { .. }
    ));
    assert_eq!(service.list_documents().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upload_to_read_only_store_fails() {
    let service = DocumentService::new(Arc::new(GatewayContentStore::new("https://ipfs.io")));
    let err = service
        .upload_document(new_document("r.pdf", DocumentType::Report, "1"), b"r".to_vec())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ExternalProvider(ProviderError::Unsupported(_))
    ));
    assert!(service.list_documents().unwrap().is_empty());
}

#[tokio::test]
async fn test_verify_document() {
    let sink = Arc::new(MockDomainEventSink::new());
    let service = service().with_event_sink(sink.clone());
    let document = service
        .upload_document(new_document("audit.pdf", DocumentType::Audit, "5"), b"audit".to_vec())
        .await
        .unwrap();

    let verified = service.verify_document(&document.hash, "auditor").unwrap();
    assert!(verified.verified);
    assert_eq!(verified.verified_by.as_deref(), Some("auditor"));
    assert!(verified.verified_at.is_some());

    assert!(matches!(
        service.verify_document("unknown", "auditor").unwrap_err(),
        Error::NotFound { .. }
    ));
    assert_eq!(
        sink.events(),
        vec![
            DomainEvent::documents_changed(vec![document.hash.clone()]),
            DomainEvent::documents_changed(vec![document.hash]),
        ]
    );
}

#[tokio::test]
async fn test_filters_by_type_and_campaign() {
    let service = service();
    service
        .upload_document(new_document("r1", DocumentType::Receipt, "1"), b"r1".to_vec())
        .await
        .unwrap();
    service
        .upload_document(new_document("m1", DocumentType::Milestone, "1"), b"m1".to_vec())
        .await
        .unwrap();
    service
        .upload_document(new_document("r2", DocumentType::Receipt, "2"), b"r2".to_vec())
        .await
        .unwrap();

    let receipts = service.documents_by_type(DocumentType::Receipt).unwrap();
    assert_eq!(
        receipts.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
        vec!["r1", "r2"]
    );
    assert_eq!(service.documents_by_campaign("1").unwrap().len(), 2);
    assert!(service.documents_by_campaign("9").unwrap().is_empty());
}

#[tokio::test]
async fn test_content_of_unregistered_hash_is_not_found() {
    let service = service();
    assert!(matches!(
        service.document_content("deadbeef").await.unwrap_err(),
        Error::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_snapshot_and_restore() {
    let service = service();
    service
        .upload_document(new_document("p", DocumentType::Proof, "4"), b"p".to_vec())
        .await
        .unwrap();
    let snapshot = service.snapshot().unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["documents"][0]["type"], "proof");

    let restored = DocumentService::new(Arc::new(InMemoryContentStore::new()));
    restored.restore(snapshot.clone()).unwrap();
    assert_eq!(restored.list_documents().unwrap(), snapshot.documents);
}
