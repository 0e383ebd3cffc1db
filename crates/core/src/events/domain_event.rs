//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::donations::DonationStatus;
use crate::web3::TransactionStatus;

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (snapshot persistence,
/// notifications, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Campaigns were created or updated.
    CampaignsChanged { campaign_ids: Vec<String> },

    /// A donation was appended to the ledger.
    DonationRecorded {
        donation_id: String,
        /// Campaign credited with the donation, if the reference resolved
        campaign_id: Option<String>,
        amount: Decimal,
    },

    /// A donation moved out of `pending`.
    DonationStatusChanged {
        donation_id: String,
        old_status: DonationStatus,
        new_status: DonationStatus,
    },

    /// Wallet transactions were submitted or settled.
    TransactionsChanged {
        tx_hash: String,
        status: TransactionStatus,
    },

    /// Documents were uploaded or verified.
    DocumentsChanged { hashes: Vec<String> },
}

impl DomainEvent {
    /// Creates a CampaignsChanged event.
    pub fn campaigns_changed(campaign_ids: Vec<String>) -> Self {
        Self::CampaignsChanged { campaign_ids }
    }

    /// Creates a DonationRecorded event.
    pub fn donation_recorded(
        donation_id: String,
        campaign_id: Option<String>,
        amount: Decimal,
    ) -> Self {
        Self::DonationRecorded {
            donation_id,
            campaign_id,
            amount,
        }
    }

    /// Creates a DonationStatusChanged event.
    pub fn donation_status_changed(
        donation_id: String,
        old_status: DonationStatus,
        new_status: DonationStatus,
    ) -> Self {
        Self::DonationStatusChanged {
            donation_id,
            old_status,
            new_status,
        }
    }

    /// Creates a TransactionsChanged event.
    pub fn transactions_changed(tx_hash: String, status: TransactionStatus) -> Self {
        Self::TransactionsChanged { tx_hash, status }
    }

    /// Creates a DocumentsChanged event.
    pub fn documents_changed(hashes: Vec<String>) -> Self {
        Self::DocumentsChanged { hashes }
    }
}
