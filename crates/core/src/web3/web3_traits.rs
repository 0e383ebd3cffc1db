use async_trait::async_trait;

use super::web3_model::{
    MilestoneData, Transaction, TransactionRequest, TransactionStatus, WalletSession, Web3Snapshot,
};
use crate::errors::{ProviderError, Result};

/// Boundary to an injected Ethereum wallet (EIP-1193 style).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts already authorised for this origin, without prompting.
    async fn get_accounts(&self) -> std::result::Result<Vec<String>, ProviderError>;

    /// Asks the user to authorise accounts.
    async fn request_accounts(&self) -> std::result::Result<Vec<String>, ProviderError>;

    async fn chain_id(&self) -> std::result::Result<u64, ProviderError>;

    /// Balance of `account` in wei.
    async fn get_balance(&self, account: &str) -> std::result::Result<u128, ProviderError>;

    /// Submits a transaction and returns its hash.
    async fn send_transaction(
        &self,
        request: TransactionRequest,
    ) -> std::result::Result<String, ProviderError>;
}

/// Wallet session operations.
#[async_trait]
pub trait Web3ServiceTrait: Send + Sync {
    /// Adopts an already-authorised account, if the wallet has one.
    async fn initialize(&self) -> Result<WalletSession>;

    async fn connect_wallet(&self) -> Result<WalletSession>;

    fn disconnect_wallet(&self) -> Result<WalletSession>;

    fn session(&self) -> Result<WalletSession>;

    /// Tracks a submitted transaction until it settles.
    fn add_pending_transaction(&self, transaction: Transaction) -> Result<()>;

    /// Settles a pending transaction as completed or failed.
    fn update_transaction_status(
        &self,
        tx_hash: &str,
        status: TransactionStatus,
    ) -> Result<Transaction>;

    /// Sends `amount_ether` to the donation contract for `campaign_id`.
    async fn donate_to_contract(&self, campaign_id: &str, amount_ether: &str) -> Result<String>;

    async fn submit_milestone(&self, campaign_id: &str, milestone: MilestoneData)
        -> Result<String>;

    async fn verify_milestone(&self, milestone_id: &str) -> Result<String>;

    fn snapshot(&self) -> Result<Web3Snapshot>;

    fn restore(&self, snapshot: Web3Snapshot) -> Result<()>;
}
