use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use super::campaigns_model::{Campaign, CampaignUpdate, NewCampaign};
use super::campaigns_traits::{CampaignCatalogTrait, CampaignComparator, CampaignFilter};
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::utils::id_utils::generate_campaign_id;

const ENTITY: &str = "Campaign";

#[derive(Default)]
struct CatalogState {
    campaigns: HashMap<String, Campaign>,
    /// Insertion order of ids
    order: Vec<String>,
}

impl CatalogState {
    fn insert(&mut self, campaign: Campaign) {
        self.order.push(campaign.id.clone());
        self.campaigns.insert(campaign.id.clone(), campaign);
    }
}

/// In-memory campaign catalog.
pub struct CampaignCatalog {
    state: RwLock<CatalogState>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl Default for CampaignCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Creates a catalog pre-populated with `campaigns`.
    ///
    /// Fails with `DuplicateId` if two seed records share an id.
    pub fn with_campaigns(campaigns: Vec<NewCampaign>) -> Result<Self> {
        let catalog = Self::new();
        for campaign in campaigns {
            catalog.add(campaign)?;
        }
        Ok(catalog)
    }

    /// Sets the domain event sink for this catalog.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, CatalogState>> {
        self.state.read().map_err(|_| Error::lock_poisoned("Catalog"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, CatalogState>> {
        self.state.write().map_err(|_| Error::lock_poisoned("Catalog"))
    }

    /// Credits a donation: adds `amount` to `raised_amount` and one to
    /// `donor_count`. `Ok(None)` and no change when the campaign is unknown.
    pub(crate) fn credit_donation(
        &self,
        campaign_id: &str,
        amount: Decimal,
    ) -> Result<Option<Campaign>> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Credited amount must be positive".to_string(),
            )));
        }
        let credited = {
            let mut state = self.write()?;
            match state.campaigns.get_mut(campaign_id) {
                Some(campaign) => {
                    campaign.raised_amount += amount;
                    campaign.donor_count += 1;
                    Some(campaign.clone())
                }
                None => None,
            }
        };

        if let Some(campaign) = &credited {
            debug!(
                "Credited {} to campaign {} (raised {})",
                amount, campaign.id, campaign.raised_amount
            );
            self.event_sink
                .emit(DomainEvent::campaigns_changed(vec![campaign.id.clone()]));
        }
        Ok(credited)
    }
}

impl CampaignCatalogTrait for CampaignCatalog {
    fn get_by_id(&self, campaign_id: &str) -> Result<Option<Campaign>> {
        Ok(self.read()?.campaigns.get(campaign_id).cloned())
    }

    fn add(&self, new_campaign: NewCampaign) -> Result<Campaign> {
        new_campaign.validate()?;
        let campaign_id = new_campaign
            .id
            .clone()
            .unwrap_or_else(generate_campaign_id);

        let campaign = {
            let mut state = self.write()?;
            if state.campaigns.contains_key(&campaign_id) {
                return Err(Error::duplicate(ENTITY, campaign_id));
            }
            let campaign = new_campaign.into_campaign(campaign_id, Utc::now());
            state.insert(campaign.clone());
            campaign
        };

        debug!("Added campaign {} ({})", campaign.id, campaign.title);
        self.event_sink
            .emit(DomainEvent::campaigns_changed(vec![campaign.id.clone()]));
        Ok(campaign)
    }

    fn update(&self, campaign_id: &str, update: CampaignUpdate) -> Result<Campaign> {
        update.validate()?;
        let updated = {
            let mut state = self.write()?;
            let campaign = state
                .campaigns
                .get_mut(campaign_id)
                .ok_or_else(|| Error::not_found(ENTITY, campaign_id))?;
            update.apply_to(campaign);
            campaign.clone()
        };

        debug!("Updated campaign {}", campaign_id);
        self.event_sink
            .emit(DomainEvent::campaigns_changed(vec![updated.id.clone()]));
        Ok(updated)
    }

    fn list(
        &self,
        filter: Option<&CampaignFilter<'_>>,
        sort: Option<&CampaignComparator<'_>>,
    ) -> Result<std::vec::IntoIter<Campaign>> {
        let mut campaigns: Vec<Campaign> = {
            let state = self.read()?;
            state
                .order
                .iter()
                .filter_map(|id| state.campaigns.get(id))
                .filter(|c| filter.map_or(true, |f| f(*c)))
                .cloned()
                .collect()
        };
        if let Some(compare) = sort {
            campaigns.sort_by(|a, b| compare(a, b));
        }
        Ok(campaigns.into_iter())
    }

    fn replace_all(&self, campaigns: Vec<Campaign>) -> Result<()> {
        let mut next = CatalogState::default();
        for campaign in campaigns {
            if next.campaigns.contains_key(&campaign.id) {
                return Err(Error::duplicate(ENTITY, campaign.id));
            }
            next.insert(campaign);
        }
        let ids = next.order.clone();
        *self.write()? = next;
        debug!("Catalog replaced with {} campaigns", ids.len());
        self.event_sink.emit(DomainEvent::campaigns_changed(ids));
        Ok(())
    }
}
