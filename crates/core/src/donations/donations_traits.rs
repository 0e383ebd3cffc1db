//! Donation ledger traits.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::donations_model::{
    Donation, DonationStatus, LedgerBalance, NewDonation, SettlementConfirmation,
};
use super::donations_service::LedgerSnapshot;
use crate::errors::Result;

/// Trait defining the contract for the donation ledger.
///
/// The ledger exclusively owns donation records. Its running total always
/// equals the sum of recorded amounts, which in turn equals what it credited
/// to catalog campaigns plus the unattributed remainder.
pub trait DonationLedgerTrait: Send + Sync {
    /// Appends a donation in `pending` state and credits the referenced
    /// campaign when it exists.
    ///
    /// Fails with `DuplicateId` when another donation already carries the same
    /// non-blank transaction id.
    fn record(&self, new_donation: NewDonation) -> Result<Donation>;

    /// Moves a donation along the status state machine.
    ///
    /// Fails with `InvalidTransition` (leaving state unchanged) for anything
    /// other than `pending -> completed` or `pending -> failed`.
    fn set_status(&self, donation_id: &str, status: DonationStatus) -> Result<Donation>;

    /// Applies a settlement confirmation to the donation carrying its
    /// transaction id. A pending match wins over settled ones.
    fn settle(&self, confirmation: SettlementConfirmation) -> Result<Donation>;

    fn get_donation(&self, donation_id: &str) -> Result<Option<Donation>>;

    /// All donations in recording order.
    fn list_donations(&self) -> Result<Vec<Donation>>;

    fn donations_for_campaign(&self, campaign_id: &str) -> Result<Vec<Donation>>;

    /// Running total of every recorded amount.
    fn total_donated(&self) -> Result<Decimal>;

    /// Sum of donations that were not credited to any campaign.
    fn unattributed_total(&self) -> Result<Decimal>;

    /// Campaign id to summed amount of attributed donations, recomputed on
    /// every call.
    fn totals_by_campaign(&self) -> Result<HashMap<String, Decimal>>;

    /// Credited, unattributed and opening totals, read under one lock.
    fn balance(&self) -> Result<LedgerBalance>;

    /// Captures donations and catalog under one read of the ledger.
    fn snapshot(&self) -> Result<LedgerSnapshot>;

    /// Replaces the ledger contents and the catalog with the snapshot's.
    /// Nothing is re-credited.
    fn restore(&self, snapshot: LedgerSnapshot) -> Result<()>;
}
