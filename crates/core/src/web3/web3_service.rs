use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use super::web3_model::{
    ContractAddresses, ContractKind, MilestoneData, Transaction, TransactionRequest,
    TransactionStatus, WalletSession, Web3Snapshot,
};
use super::web3_traits::{WalletProvider, Web3ServiceTrait};
use crate::errors::{Error, ProviderError, Result};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::utils::wei_utils::{ether_to_hex_wei, format_wei_as_ether};

const ENTITY: &str = "Transaction";

/// Wallet session service on top of a [`WalletProvider`].
///
/// Provider calls are awaited without holding the session lock; state is
/// updated in one write once the provider answered.
pub struct Web3Service {
    provider: Arc<dyn WalletProvider>,
    session: RwLock<WalletSession>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl Web3Service {
    pub fn new(provider: Arc<dyn WalletProvider>, contracts: ContractAddresses) -> Self {
        Self {
            provider,
            session: RwLock::new(WalletSession::disconnected(contracts)),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, WalletSession>> {
        self.session
            .read()
            .map_err(|_| Error::lock_poisoned("Wallet session"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, WalletSession>> {
        self.session
            .write()
            .map_err(|_| Error::lock_poisoned("Wallet session"))
    }

    /// Reads chain id and balance for `account` and marks the session connected.
    async fn adopt_account(&self, account: String) -> Result<WalletSession> {
        let chain_id = self.provider.chain_id().await?;
        let balance = self.provider.get_balance(&account).await?;

        let mut session = self.write()?;
        session.is_connected = true;
        session.account = Some(account);
        session.chain_id = Some(chain_id);
        session.balance = format_wei_as_ether(balance);
        debug!(
            "Wallet connected to chain {} with balance {}",
            chain_id, session.balance
        );
        Ok(session.clone())
    }

    /// Connected account and the address of `kind`, or why a call can't be made.
    fn contract_target(&self, kind: ContractKind) -> Result<(String, String)> {
        let session = self.read()?;
        let account = session
            .account
            .clone()
            .filter(|_| session.is_connected)
            .ok_or(ProviderError::NotConnected)?;
        let address = session
            .contracts
            .address_of(kind)
            .map(str::to_string)
            .ok_or_else(|| ProviderError::ContractNotDeployed(kind.as_str().to_string()))?;
        Ok((account, address))
    }

    async fn send_contract_call(
        &self,
        kind: ContractKind,
        campaign_id: Option<&str>,
        value_ether: Option<&str>,
        payload: &str,
    ) -> Result<String> {
        let (from, to) = self.contract_target(kind)?;
        let value = value_ether.map(ether_to_hex_wei).transpose()?;
        let request = TransactionRequest {
            from: from.clone(),
            to: to.clone(),
            value,
            data: Some(format!("0x{}", hex::encode(payload))),
        };

        let tx_hash = self.provider.send_transaction(request).await?;
        debug!("Submitted {} transaction {}", kind.as_str(), tx_hash);

        self.add_pending_transaction(Transaction {
            hash: tx_hash.clone(),
            from,
            to,
            value: value_ether.unwrap_or("0").to_string(),
            timestamp: Utc::now(),
            status: TransactionStatus::Pending,
            kind: kind.transaction_kind(),
            campaign_id: campaign_id.map(str::to_string),
            gas_used: None,
            gas_price: None,
        })?;
        Ok(tx_hash)
    }
}

#[async_trait]
impl Web3ServiceTrait for Web3Service {
    async fn initialize(&self) -> Result<WalletSession> {
        let accounts = match self.provider.get_accounts().await {
            Ok(accounts) => accounts,
            Err(ProviderError::NotInstalled) => {
                debug!("No wallet provider installed; session stays disconnected");
                return self.session();
            }
            Err(e) => {
                warn!("Failed to initialize wallet session: {}", e);
                return self.session();
            }
        };

        match accounts.into_iter().next() {
            Some(account) => self.adopt_account(account).await,
            None => self.session(),
        }
    }

    async fn connect_wallet(&self) -> Result<WalletSession> {
        let account = self
            .provider
            .request_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Rejected("No accounts were authorised".to_string()))?;
        self.adopt_account(account).await
    }

    fn disconnect_wallet(&self) -> Result<WalletSession> {
        let mut session = self.write()?;
        session.is_connected = false;
        session.account = None;
        session.chain_id = None;
        session.balance = "0".to_string();
        Ok(session.clone())
    }

    fn session(&self) -> Result<WalletSession> {
        Ok(self.read()?.clone())
    }

    fn add_pending_transaction(&self, mut transaction: Transaction) -> Result<()> {
        let tx_hash = transaction.hash.clone();
        {
            let mut session = self.write()?;
            let known = session
                .pending_transactions
                .iter()
                .chain(session.completed_transactions.iter())
                .any(|tx| tx.hash == tx_hash);
            if known {
                return Err(Error::duplicate(ENTITY, tx_hash));
            }
            transaction.status = TransactionStatus::Pending;
            session.pending_transactions.push(transaction);
        }
        self.event_sink.emit(DomainEvent::transactions_changed(
            tx_hash,
            TransactionStatus::Pending,
        ));
        Ok(())
    }

    fn update_transaction_status(
        &self,
        tx_hash: &str,
        status: TransactionStatus,
    ) -> Result<Transaction> {
        let settled = {
            let mut session = self.write()?;
            let index = match session
                .pending_transactions
                .iter()
                .position(|tx| tx.hash == tx_hash)
            {
                Some(index) if status.is_terminal() => index,
                Some(_) => {
                    return Err(Error::InvalidTransition {
                        entity: ENTITY,
                        id: tx_hash.to_string(),
                        from: TransactionStatus::Pending.to_string(),
                        to: status.to_string(),
                    })
                }
                None => {
                    let settled = session
                        .completed_transactions
                        .iter()
                        .find(|tx| tx.hash == tx_hash)
                        .map(|tx| tx.status);
                    return Err(match settled {
                        Some(from) => Error::InvalidTransition {
                            entity: ENTITY,
                            id: tx_hash.to_string(),
                            from: from.to_string(),
                            to: status.to_string(),
                        },
                        None => Error::not_found(ENTITY, tx_hash),
                    });
                }
            };

            let mut transaction = session.pending_transactions.remove(index);
            transaction.status = status;
            session.completed_transactions.push(transaction.clone());
            transaction
        };

        debug!("Transaction {} settled as {}", tx_hash, status);
        self.event_sink.emit(DomainEvent::transactions_changed(
            tx_hash.to_string(),
            status,
        ));
        Ok(settled)
    }

    async fn donate_to_contract(&self, campaign_id: &str, amount_ether: &str) -> Result<String> {
        self.send_contract_call(
            ContractKind::Donation,
            Some(campaign_id),
            Some(amount_ether),
            campaign_id,
        )
        .await
    }

    async fn submit_milestone(
        &self,
        campaign_id: &str,
        milestone: MilestoneData,
    ) -> Result<String> {
        milestone.validate()?;
        let payload = format!("{}{}", campaign_id, milestone.title);
        self.send_contract_call(ContractKind::Milestone, Some(campaign_id), None, &payload)
            .await
    }

    async fn verify_milestone(&self, milestone_id: &str) -> Result<String> {
        self.send_contract_call(ContractKind::Audit, None, None, milestone_id)
            .await
    }

    fn snapshot(&self) -> Result<Web3Snapshot> {
        let session = self.read()?;
        Ok(Web3Snapshot {
            completed_transactions: session.completed_transactions.clone(),
            contracts: session.contracts.clone(),
        })
    }

    /// Restores settled transactions. Configured contract addresses take
    /// precedence over persisted ones.
    fn restore(&self, snapshot: Web3Snapshot) -> Result<()> {
        let mut session = self.write()?;
        session.completed_transactions = snapshot.completed_transactions;
        let contracts = &mut session.contracts;
        if contracts.donation.is_none() {
            contracts.donation = snapshot.contracts.donation;
        }
        if contracts.milestone.is_none() {
            contracts.milestone = snapshot.contracts.milestone;
        }
        if contracts.audit.is_none() {
            contracts.audit = snapshot.contracts.audit;
        }
        Ok(())
    }
}
