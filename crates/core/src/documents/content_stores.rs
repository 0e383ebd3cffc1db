//! Content store implementations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use sha2::{Digest, Sha256};

use super::documents_traits::ContentStore;
use crate::errors::ProviderError;

/// Process-local store addressed by the sha256 of the content.
#[derive(Default)]
pub struct InMemoryContentStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_of(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }

    fn blobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.blobs.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String, ProviderError> {
        let hash = Self::hash_of(&bytes);
        self.blobs().entry(hash.clone()).or_insert(bytes);
        Ok(hash)
    }

    async fn fetch(&self, hash: &str) -> Result<Vec<u8>, ProviderError> {
        self.blobs()
            .get(hash)
            .cloned()
            .ok_or_else(|| ProviderError::ContentNotFound(hash.to_string()))
    }
}

/// Read-only access to a public IPFS HTTP gateway.
pub struct GatewayContentStore {
    client: Client,
    gateway: String,
}

impl GatewayContentStore {
    pub fn new(gateway: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            gateway: gateway.into().trim_end_matches('/').to_string(),
        }
    }

    fn content_url(&self, hash: &str) -> String {
        format!("{}/ipfs/{}", self.gateway, hash)
    }
}

#[async_trait]
impl ContentStore for GatewayContentStore {
    async fn put(&self, _bytes: Vec<u8>) -> Result<String, ProviderError> {
        Err(ProviderError::Unsupported(
            "gateway content stores are read-only".to_string(),
        ))
    }

    async fn fetch(&self, hash: &str) -> Result<Vec<u8>, ProviderError> {
        let url = self.content_url(hash);
        debug!("Fetching content from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::ContentNotFound(hash.to_string()));
        }
        if !status.is_success() {
            return Err(ProviderError::Connection(format!("HTTP {}", status)));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to read content: {}", e)))
    }
}

/// Writes to `primary`; reads fall back to `fallback` for content the
/// primary store has never seen.
pub struct TieredContentStore {
    primary: Arc<dyn ContentStore>,
    fallback: Arc<dyn ContentStore>,
}

impl TieredContentStore {
    pub fn new(primary: Arc<dyn ContentStore>, fallback: Arc<dyn ContentStore>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl ContentStore for TieredContentStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String, ProviderError> {
        self.primary.put(bytes).await
    }

    async fn fetch(&self, hash: &str) -> Result<Vec<u8>, ProviderError> {
        match self.primary.fetch(hash).await {
            Err(ProviderError::ContentNotFound(_)) => self.fallback.fetch(hash).await,
            other => other,
        }
    }
}
