use std::sync::Arc;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::snapshots_model::{SnapshotEnvelope, SnapshotKey};
use super::snapshots_traits::SnapshotStore;
use crate::constants::SNAPSHOT_SCHEMA_VERSION;
use crate::documents::{DocumentServiceTrait, DocumentSnapshot};
use crate::donations::{DonationLedgerTrait, LedgerSnapshot};
use crate::errors::{Error, Result};
use crate::web3::{Web3ServiceTrait, Web3Snapshot};

/// Saves and restores service state through a [`SnapshotStore`].
pub struct SnapshotService {
    store: Arc<dyn SnapshotStore>,
    ledger: Arc<dyn DonationLedgerTrait>,
    web3: Arc<dyn Web3ServiceTrait>,
    documents: Arc<dyn DocumentServiceTrait>,
}

impl SnapshotService {
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        ledger: Arc<dyn DonationLedgerTrait>,
        web3: Arc<dyn Web3ServiceTrait>,
        documents: Arc<dyn DocumentServiceTrait>,
    ) -> Self {
        Self {
            store,
            ledger,
            web3,
            documents,
        }
    }

    /// Writes the current state of `key`'s service.
    pub async fn save(&self, key: SnapshotKey) -> Result<()> {
        let value = match key {
            SnapshotKey::Donations => encode(self.ledger.snapshot()?)?,
            SnapshotKey::Web3 => encode(self.web3.snapshot()?)?,
            SnapshotKey::Documents => encode(self.documents.snapshot()?)?,
        };
        self.store.put(key.as_str(), value).await?;
        debug!("Saved snapshot '{}'", key);
        Ok(())
    }

    pub async fn save_all(&self) -> Result<()> {
        for key in SnapshotKey::ALL {
            self.save(key).await?;
        }
        Ok(())
    }

    /// Restores `key`'s service from the store. Returns `false` when nothing
    /// was stored, leaving the service as it is.
    pub async fn load(&self, key: SnapshotKey) -> Result<bool> {
        let Some(raw) = self.store.get(key.as_str()).await? else {
            debug!("No snapshot stored under '{}'", key);
            return Ok(false);
        };

        match key {
            SnapshotKey::Donations => self.ledger.restore(decode::<LedgerSnapshot>(key, &raw)?)?,
            SnapshotKey::Web3 => self.web3.restore(decode::<Web3Snapshot>(key, &raw)?)?,
            SnapshotKey::Documents => self
                .documents
                .restore(decode::<DocumentSnapshot>(key, &raw)?)?,
        }
        info!("Restored snapshot '{}'", key);
        Ok(true)
    }

    /// Restores every stored snapshot and returns the keys that were found.
    pub async fn load_all(&self) -> Result<Vec<SnapshotKey>> {
        let mut restored = Vec::new();
        for key in SnapshotKey::ALL {
            if self.load(key).await? {
                restored.push(key);
            }
        }
        Ok(restored)
    }

    pub async fn clear(&self, key: SnapshotKey) -> Result<()> {
        self.store.remove(key.as_str()).await
    }
}

fn encode<T: Serialize>(state: T) -> Result<String> {
    Ok(serde_json::to_string(&SnapshotEnvelope::current(state))?)
}

fn decode<T: DeserializeOwned>(key: SnapshotKey, raw: &str) -> Result<T> {
    let envelope: SnapshotEnvelope<serde_json::Value> = serde_json::from_str(raw)?;
    if envelope.version > SNAPSHOT_SCHEMA_VERSION {
        return Err(Error::Snapshot(format!(
            "snapshot '{}' has version {}, newer than supported version {}",
            key, envelope.version, SNAPSHOT_SCHEMA_VERSION
        )));
    }
    Ok(serde_json::from_value(envelope.state)?)
}
