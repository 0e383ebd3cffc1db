//! Wallet provider implementations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::web3_model::TransactionRequest;
use super::web3_traits::WalletProvider;
use crate::errors::ProviderError;
use crate::utils::wei_utils::parse_hex_quantity;

/// EIP-1193 code for a request the user declined.
const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Wallet backed by a JSON-RPC endpoint (a node or a signer proxy).
pub struct JsonRpcWalletProvider {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcWalletProvider {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("JSON-RPC request #{}: {}", id, method);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(format!("{} failed: {}", method, e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Connection(format!(
                "HTTP {} - {}",
                status, text
            )));
        }

        let payload: RpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        if let Some(error) = payload.error {
            return Err(if error.code == USER_REJECTED_CODE {
                ProviderError::Rejected(error.message)
            } else {
                ProviderError::InvalidResponse(format!("{} ({})", error.message, error.code))
            });
        }

        let result = payload
            .result
            .ok_or_else(|| ProviderError::InvalidResponse(format!("{} returned no result", method)))?;
        serde_json::from_value(result).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWalletProvider {
    async fn get_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.call("eth_accounts", json!([])).await
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.call("eth_requestAccounts", json!([])).await
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let hex: String = self.call("eth_chainId", json!([])).await?;
        let id = parse_hex_quantity(&hex)?;
        u64::try_from(id).map_err(|_| ProviderError::InvalidResponse(format!("chain id {} out of range", hex)))
    }

    async fn get_balance(&self, account: &str) -> Result<u128, ProviderError> {
        let hex: String = self
            .call("eth_getBalance", json!([account, "latest"]))
            .await?;
        parse_hex_quantity(&hex)
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<String, ProviderError> {
        self.call("eth_sendTransaction", json!([request])).await
    }
}

/// Used when no wallet is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableWalletProvider;

#[async_trait]
impl WalletProvider for UnavailableWalletProvider {
    async fn get_accounts(&self) -> Result<Vec<String>, ProviderError> {
        Err(ProviderError::NotInstalled)
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        Err(ProviderError::NotInstalled)
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        Err(ProviderError::NotInstalled)
    }

    async fn get_balance(&self, _account: &str) -> Result<u128, ProviderError> {
        Err(ProviderError::NotInstalled)
    }

    async fn send_transaction(&self, _request: TransactionRequest) -> Result<String, ProviderError> {
        Err(ProviderError::NotInstalled)
    }
}
