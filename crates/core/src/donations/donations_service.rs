use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::donations_model::{
    Donation, DonationStatus, LedgerBalance, NewDonation, SettlementConfirmation,
};
use super::donations_traits::DonationLedgerTrait;
use crate::campaigns::{Campaign, CampaignCatalog, CampaignCatalogTrait};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::metrics::tax_benefit;
use crate::utils::id_utils::generate_donation_id;

const ENTITY: &str = "Donation";

/// Serializable ledger contents together with the catalog they credited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    pub donations: Vec<Donation>,
    pub total_donated: Decimal,
}

#[derive(Default)]
struct LedgerState {
    donations: Vec<Donation>,
    total_donated: Decimal,
}

impl LedgerState {
    fn position(&self, donation_id: &str) -> Option<usize> {
        self.donations.iter().position(|d| d.id == donation_id)
    }

    fn has_transaction(&self, transaction_id: &str) -> bool {
        self.donations
            .iter()
            .any(|d| d.transaction_id.as_deref() == Some(transaction_id))
    }

    /// Donation to settle for `transaction_id`: the pending one if any, else
    /// the first match so the caller sees why it cannot move.
    fn settlement_target(&self, transaction_id: &str) -> Option<usize> {
        let matches = |d: &Donation| d.transaction_id.as_deref() == Some(transaction_id);
        self.donations
            .iter()
            .position(|d| matches(d) && d.status == DonationStatus::Pending)
            .or_else(|| self.donations.iter().position(matches))
    }
}

/// In-memory donation ledger crediting campaigns of a shared catalog.
///
/// Holds the concrete catalog: crediting is not exposed through
/// `CampaignCatalogTrait`, so the ledger is the only writer of raised totals.
pub struct DonationLedger {
    catalog: Arc<CampaignCatalog>,
    state: RwLock<LedgerState>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl DonationLedger {
    /// Creates an empty ledger over `catalog`.
    pub fn new(catalog: Arc<CampaignCatalog>) -> Self {
        Self {
            catalog,
            state: RwLock::new(LedgerState::default()),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this ledger.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, LedgerState>> {
        self.state.read().map_err(|_| Error::lock_poisoned("Ledger"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, LedgerState>> {
        self.state.write().map_err(|_| Error::lock_poisoned("Ledger"))
    }

    fn transition(
        state: &mut LedgerState,
        index: usize,
        status: DonationStatus,
    ) -> Result<(Donation, DonationStatus)> {
        let donation = &mut state.donations[index];
        let old_status = donation.status;
        if !old_status.can_transition_to(status) {
            return Err(Error::InvalidTransition {
                entity: ENTITY,
                id: donation.id.clone(),
                from: old_status.to_string(),
                to: status.to_string(),
            });
        }
        donation.status = status;
        Ok((donation.clone(), old_status))
    }

    fn emit_status_change(&self, donation: &Donation, old_status: DonationStatus) {
        debug!(
            "Donation {} moved {} -> {}",
            donation.id, old_status, donation.status
        );
        self.event_sink.emit(DomainEvent::donation_status_changed(
            donation.id.clone(),
            old_status,
            donation.status,
        ));
    }
}

impl DonationLedgerTrait for DonationLedger {
    fn record(&self, mut new_donation: NewDonation) -> Result<Donation> {
        new_donation.validate()?;
        new_donation.transaction_id = new_donation
            .transaction_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let donation = {
            // Held across the catalog credit so readers never see one side
            // of the update without the other.
            let mut state = self.write()?;

            if let Some(transaction_id) = new_donation.transaction_id.as_deref() {
                if state.has_transaction(transaction_id) {
                    return Err(Error::duplicate("Transaction", transaction_id));
                }
            }

            let mut donation_id = generate_donation_id();
            while state.position(&donation_id).is_some() {
                donation_id = generate_donation_id();
            }

            let is_attributed = match new_donation.campaign_id.as_deref() {
                Some(campaign_id) => {
                    let credited = self
                        .catalog
                        .credit_donation(campaign_id, new_donation.amount)?;
                    if credited.is_none() {
                        warn!(
                            "Donation {} references unknown campaign '{}'; recorded as unattributed",
                            donation_id, campaign_id
                        );
                    }
                    credited.is_some()
                }
                None => false,
            };

            let donation = Donation {
                id: donation_id,
                amount: new_donation.amount,
                campaign_id: new_donation.campaign_id,
                is_attributed,
                donor_name: new_donation.donor_name,
                donor_email: new_donation.donor_email,
                message: new_donation.message,
                is_anonymous: new_donation.is_anonymous,
                timestamp: Utc::now(),
                status: DonationStatus::Pending,
                payment_method: new_donation.payment_method,
                transaction_id: new_donation.transaction_id,
                tax_benefit: tax_benefit(new_donation.amount),
            };
            state.total_donated += donation.amount;
            state.donations.push(donation.clone());
            donation
        };

        debug!(
            "Recorded donation {} of {} (attributed: {})",
            donation.id, donation.amount, donation.is_attributed
        );
        self.event_sink.emit(DomainEvent::donation_recorded(
            donation.id.clone(),
            donation
                .campaign_id
                .clone()
                .filter(|_| donation.is_attributed),
            donation.amount,
        ));
        Ok(donation)
    }

    fn set_status(&self, donation_id: &str, status: DonationStatus) -> Result<Donation> {
        let (donation, old_status) = {
            let mut state = self.write()?;
            let index = state
                .position(donation_id)
                .ok_or_else(|| Error::not_found(ENTITY, donation_id))?;
            Self::transition(&mut state, index, status)?
        };
        self.emit_status_change(&donation, old_status);
        Ok(donation)
    }

    fn settle(&self, confirmation: SettlementConfirmation) -> Result<Donation> {
        let (donation, old_status) = {
            let mut state = self.write()?;
            let index = state
                .settlement_target(&confirmation.transaction_id)
                .ok_or_else(|| Error::not_found("Settlement", &confirmation.transaction_id))?;
            Self::transition(&mut state, index, confirmation.outcome.target_status())?
        };
        self.emit_status_change(&donation, old_status);
        Ok(donation)
    }

    fn get_donation(&self, donation_id: &str) -> Result<Option<Donation>> {
        let state = self.read()?;
        Ok(state.donations.iter().find(|d| d.id == donation_id).cloned())
    }

    fn list_donations(&self) -> Result<Vec<Donation>> {
        Ok(self.read()?.donations.clone())
    }

    fn donations_for_campaign(&self, campaign_id: &str) -> Result<Vec<Donation>> {
        let state = self.read()?;
        Ok(state
            .donations
            .iter()
            .filter(|d| d.campaign_id.as_deref() == Some(campaign_id))
            .cloned()
            .collect())
    }

    fn total_donated(&self) -> Result<Decimal> {
        Ok(self.read()?.total_donated)
    }

    fn unattributed_total(&self) -> Result<Decimal> {
        let state = self.read()?;
        Ok(state
            .donations
            .iter()
            .filter(|d| !d.is_attributed)
            .map(|d| d.amount)
            .sum())
    }

    fn totals_by_campaign(&self) -> Result<HashMap<String, Decimal>> {
        let state = self.read()?;
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for donation in state.donations.iter().filter(|d| d.is_attributed) {
            if let Some(campaign_id) = &donation.campaign_id {
                *totals.entry(campaign_id.clone()).or_default() += donation.amount;
            }
        }
        Ok(totals)
    }

    fn balance(&self) -> Result<LedgerBalance> {
        let state = self.read()?;
        let campaigns = self.catalog.get_all()?;
        Ok(LedgerBalance {
            credited_total: campaigns.iter().map(Campaign::ledger_credited).sum(),
            unattributed_total: state
                .donations
                .iter()
                .filter(|d| !d.is_attributed)
                .map(|d| d.amount)
                .sum(),
            total_donated: state.total_donated,
            opening_total: campaigns.iter().map(|c| c.opening_amount).sum(),
        })
    }

    fn snapshot(&self) -> Result<LedgerSnapshot> {
        let state = self.read()?;
        Ok(LedgerSnapshot {
            campaigns: self.catalog.get_all()?,
            donations: state.donations.clone(),
            total_donated: state.total_donated,
        })
    }

    fn restore(&self, snapshot: LedgerSnapshot) -> Result<()> {
        let recomputed: Decimal = snapshot.donations.iter().map(|d| d.amount).sum();
        if recomputed != snapshot.total_donated {
            warn!(
                "Ledger snapshot total {} disagrees with its donations ({}); using the recomputed sum",
                snapshot.total_donated, recomputed
            );
        }
        let mut state = self.write()?;
        self.catalog.replace_all(snapshot.campaigns)?;
        *state = LedgerState {
            donations: snapshot.donations,
            total_donated: recomputed,
        };
        debug!("Ledger restored with {} donations", state.donations.len());
        Ok(())
    }
}
