use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::campaigns::{seed_campaigns, CampaignCatalog, CampaignCatalogTrait};
use crate::documents::{
    DocumentService, DocumentServiceTrait, DocumentType, InMemoryContentStore, NewDocument,
};
use crate::donations::{DonationLedger, DonationLedgerTrait, NewDonation};
use crate::errors::{Error, Result};
use crate::snapshots::*;
use crate::web3::{
    ContractAddresses, UnavailableWalletProvider, Web3Service, Web3ServiceTrait,
};

// ============== Mock SnapshotStore ==============

#[derive(Default)]
struct MockSnapshotStore {
    values: Mutex<HashMap<String, String>>,
}

impl MockSnapshotStore {
    fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl SnapshotStore for MockSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

struct Services {
    catalog: Arc<CampaignCatalog>,
    ledger: Arc<DonationLedger>,
    web3: Arc<Web3Service>,
    documents: Arc<DocumentService>,
    snapshots: SnapshotService,
}

fn services(store: Arc<MockSnapshotStore>) -> Services {
    let catalog = Arc::new(CampaignCatalog::with_campaigns(seed_campaigns()).unwrap());
    let ledger = Arc::new(DonationLedger::new(catalog.clone()));
    let web3 = Arc::new(Web3Service::new(
        Arc::new(UnavailableWalletProvider),
        ContractAddresses {
            donation: Some("0xdonation".to_string()),
            ..Default::default()
        },
    ));
    let documents = Arc::new(DocumentService::new(Arc::new(InMemoryContentStore::new())));
    let snapshots = SnapshotService::new(
        store,
        ledger.clone(),
        web3.clone(),
        documents.clone(),
    );
    Services {
        catalog,
        ledger,
        web3,
        documents,
        snapshots,
    }
}

#[tokio::test]
async fn test_save_all_then_load_all_round_trips_state() {
    let store = Arc::new(MockSnapshotStore::default());
    let source = services(store.clone());
    source
        .ledger
        .record(NewDonation {
            amount: dec!(1500),
            campaign_id: Some("1".to_string()),
            ..Default::default()
        })
        .unwrap();
    source
        .documents
        .upload_document(
            NewDocument {
                name: "receipt.pdf".to_string(),
                doc_type: DocumentType::Receipt,
                campaign_id: "1".to_string(),
                uploaded_by: "ops".to_string(),
            },
            b"receipt".to_vec(),
        )
        .await
        .unwrap();
    source.snapshots.save_all().await.unwrap();

    let target = services(store);
    let restored = target.snapshots.load_all().await.unwrap();
    assert_eq!(restored, SnapshotKey::ALL.to_vec());
    assert_eq!(target.ledger.total_donated().unwrap(), dec!(1500));
    assert_eq!(
        target.catalog.get_by_id("1").unwrap(),
        source.catalog.get_by_id("1").unwrap()
    );
    assert_eq!(target.documents.list_documents().unwrap().len(), 1);
    assert_eq!(
        target.web3.session().unwrap().contracts.donation.as_deref(),
        Some("0xdonation")
    );
}

#[tokio::test]
async fn test_snapshot_is_wrapped_in_versioned_envelope() {
    let store = Arc::new(MockSnapshotStore::default());
    let services = services(store.clone());
    services.snapshots.save(SnapshotKey::Donations).await.unwrap();

    let raw = store.raw("donation-storage").unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["state"]["campaigns"].as_array().unwrap().len(), 12);
    assert!(json["state"]["donations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_snapshot_starts_fresh() {
    let store = Arc::new(MockSnapshotStore::default());
    let services = services(store);
    assert!(!services.snapshots.load(SnapshotKey::Donations).await.unwrap());
    assert!(services.snapshots.load_all().await.unwrap().is_empty());
    assert_eq!(services.catalog.get_all().unwrap().len(), 12);
}

#[tokio::test]
async fn test_newer_snapshot_version_is_rejected() {
    let store = Arc::new(MockSnapshotStore::default());
    store.set_raw(
        "ipfs-storage",
        r#"{"version":2,"state":{"documents":[]}}"#,
    );
    let services = services(store);
    let err = services
        .snapshots
        .load(SnapshotKey::Documents)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Snapshot(_)));
}

#[tokio::test]
async fn test_corrupt_snapshot_is_an_error() {
    let store = Arc::new(MockSnapshotStore::default());
    store.set_raw("web3-storage", "not json");
    let services = services(store);
    assert!(matches!(
        services.snapshots.load(SnapshotKey::Web3).await.unwrap_err(),
        Error::Snapshot(_)
    ));
}

#[tokio::test]
async fn test_clear_removes_snapshot() {
    let store = Arc::new(MockSnapshotStore::default());
    let services = services(store.clone());
    services.snapshots.save(SnapshotKey::Web3).await.unwrap();
    assert!(store.raw("web3-storage").is_some());
    services.snapshots.clear(SnapshotKey::Web3).await.unwrap();
    assert!(store.raw("web3-storage").is_none());
}
