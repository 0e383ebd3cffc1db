use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::Error;

/// Lifecycle of an on-chain transaction submitted through the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a transaction was sent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Donation,
    Milestone,
    Verification,
}

/// The three platform contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Donation,
    Milestone,
    Audit,
}

impl ContractKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::Donation => "donation",
            ContractKind::Milestone => "milestone",
            ContractKind::Audit => "audit",
        }
    }

    pub fn transaction_kind(&self) -> TransactionKind {
        match self {
            ContractKind::Donation => TransactionKind::Donation,
            ContractKind::Milestone => TransactionKind::Milestone,
            ContractKind::Audit => TransactionKind::Verification,
        }
    }
}

/// Transaction tracked by the wallet session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    /// Value in ether as entered by the donor; "0" for contract calls
    pub value: String,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
}

/// Milestone submitted to the milestone contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneData {
    pub title: String,
    pub description: String,
    pub target_amount: String,
    /// Content hashes of supporting documents
    #[serde(default)]
    pub proof_documents: Vec<String>,
    pub deadline: DateTime<Utc>,
}

impl MilestoneData {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        Ok(())
    }
}

/// Parameters of an `eth_sendTransaction` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// Hex-encoded wei amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Deployed contract addresses, configured at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    #[serde(rename = "donationContractAddress")]
    pub donation: Option<String>,
    #[serde(rename = "milestoneContractAddress")]
    pub milestone: Option<String>,
    #[serde(rename = "auditContractAddress")]
    pub audit: Option<String>,
}

impl ContractAddresses {
    pub fn address_of(&self, kind: ContractKind) -> Option<&str> {
        match kind {
            ContractKind::Donation => self.donation.as_deref(),
            ContractKind::Milestone => self.milestone.as_deref(),
            ContractKind::Audit => self.audit.as_deref(),
        }
    }
}

/// Current wallet session as presented to the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletSession {
    pub is_connected: bool,
    pub account: Option<String>,
    pub chain_id: Option<u64>,
    /// Balance in ether, four decimals
    pub balance: String,
    #[serde(flatten)]
    pub contracts: ContractAddresses,
    pub pending_transactions: Vec<Transaction>,
    /// Settled transactions, both completed and failed
    pub completed_transactions: Vec<Transaction>,
}

impl WalletSession {
    pub fn disconnected(contracts: ContractAddresses) -> Self {
        Self {
            is_connected: false,
            account: None,
            chain_id: None,
            balance: "0".to_string(),
            contracts,
            pending_transactions: Vec::new(),
            completed_transactions: Vec::new(),
        }
    }
}

/// Persisted portion of the wallet session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Web3Snapshot {
    pub completed_transactions: Vec<Transaction>,
    #[serde(flatten)]
    pub contracts: ContractAddresses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_serializes_type_field() {
        let tx = Transaction {
            hash: "0xabc".to_string(),
            from: "0x1".to_string(),
            to: "0x2".to_string(),
            value: "0.5".to_string(),
            timestamp: Utc::now(),
            status: TransactionStatus::Pending,
            kind: TransactionKind::Donation,
            campaign_id: Some("3".to_string()),
            gas_used: None,
            gas_price: None,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "donation");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["campaignId"], "3");
        assert!(json.get("gasUsed").is_none());
    }

    #[test]
    fn test_snapshot_flattens_contract_addresses() {
        let snapshot = Web3Snapshot {
            completed_transactions: vec![],
            contracts: ContractAddresses {
                donation: Some("0xd0".to_string()),
                milestone: None,
                audit: None,
            },
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["donationContractAddress"], "0xd0");
        assert!(json["milestoneContractAddress"].is_null());
    }

    #[test]
    fn test_contract_kind_maps_transaction_kind() {
        assert_eq!(
            ContractKind::Audit.transaction_kind(),
            TransactionKind::Verification
        );
        assert!(TransactionStatus::Failed.is_terminal());
        assert!(!TransactionStatus::Pending.is_terminal());
    }
}
