//! Campaign domain models.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::ALL_CATEGORIES_LABEL;
use crate::metrics::{format_compact_number, format_currency, progress_percentage};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a fundraising campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub target_amount: Decimal,
    /// Opening balance plus ledger credits. Never decreases: only the ledger
    /// moves it, and refunds are not modeled.
    pub raised_amount: Decimal,
    /// Collected before the ledger existed; fixed at creation.
    #[serde(default)]
    pub opening_amount: Decimal,
    pub donor_count: u64,
    /// Affects sort and display priority only
    pub is_urgent: bool,
    pub image_url: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub beneficiaries: Option<u32>,
    pub story: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn progress_percentage(&self) -> Decimal {
        progress_percentage(self.raised_amount, self.target_amount)
    }

    /// Part of `raised_amount` that came through the donation ledger.
    pub fn ledger_credited(&self) -> Decimal {
        self.raised_amount - self.opening_amount
    }
}

/// Input model for creating a new campaign.
///
/// Opening `raised_amount` / `donor_count` figures are accepted so that seed
/// data can carry totals collected before the ledger existed. The amount is
/// kept as the campaign's `opening_amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub raised_amount: Decimal,
    #[serde(default)]
    pub donor_count: u64,
    #[serde(default)]
    pub is_urgent: bool,
    pub image_url: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub beneficiaries: Option<u32>,
    pub story: Option<String>,
}

impl NewCampaign {
    /// Validates the new campaign data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Campaign title cannot be empty".to_string(),
            )));
        }
        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Campaign id cannot be blank".to_string(),
                )));
            }
        }
        if self.target_amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount cannot be negative".to_string(),
            )));
        }
        if self.raised_amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Raised amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub(crate) fn into_campaign(self, id: String, created_at: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            target_amount: self.target_amount,
            raised_amount: self.raised_amount,
            opening_amount: self.raised_amount,
            donor_count: self.donor_count,
            is_urgent: self.is_urgent,
            image_url: self.image_url,
            end_date: self.end_date,
            beneficiaries: self.beneficiaries,
            story: self.story,
            created_at,
        }
    }
}

/// Partial update for an existing campaign.
///
/// `raised_amount` and `donor_count` are deliberately absent: they are
/// counters owned by the donation ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub target_amount: Option<Decimal>,
    pub is_urgent: Option<bool>,
    pub image_url: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub beneficiaries: Option<u32>,
    pub story: Option<String>,
}

impl CampaignUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Campaign title cannot be empty".to_string(),
                )));
            }
        }
        if let Some(target) = self.target_amount {
            if target.is_sign_negative() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Target amount cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// Merges the present fields into `campaign`.
    pub fn apply_to(self, campaign: &mut Campaign) {
        if let Some(title) = self.title {
            campaign.title = title;
        }
        if let Some(description) = self.description {
            campaign.description = description;
        }
        if let Some(category) = self.category {
            campaign.category = category;
        }
        if let Some(location) = self.location {
            campaign.location = location;
        }
        if let Some(target_amount) = self.target_amount {
            campaign.target_amount = target_amount;
        }
        if let Some(is_urgent) = self.is_urgent {
            campaign.is_urgent = is_urgent;
        }
        if self.image_url.is_some() {
            campaign.image_url = self.image_url;
        }
        if self.end_date.is_some() {
            campaign.end_date = self.end_date;
        }
        if self.beneficiaries.is_some() {
            campaign.beneficiaries = self.beneficiaries;
        }
        if self.story.is_some() {
            campaign.story = self.story;
        }
    }
}

/// Sort orders offered by the campaign browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CampaignSort {
    /// Urgent campaigns first
    #[default]
    Urgent,
    /// Highest progress first
    NearingGoal,
    /// Catalog order
    Newest,
    /// Most donors first
    MostLoved,
}

impl CampaignSort {
    pub fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            CampaignSort::Urgent => b.is_urgent.cmp(&a.is_urgent),
            CampaignSort::NearingGoal => b.progress_percentage().cmp(&a.progress_percentage()),
            CampaignSort::Newest => Ordering::Equal,
            CampaignSort::MostLoved => b.donor_count.cmp(&a.donor_count),
        }
    }
}

/// Search / category / sort parameters of the campaign browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub sort: CampaignSort,
}

impl CampaignQuery {
    pub fn matches(&self, campaign: &Campaign) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => campaign
                .title
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };
        let matches_category = match self.category.as_deref() {
            None => true,
            Some(category) if category == ALL_CATEGORIES_LABEL => true,
            Some(category) => campaign.category == category,
        };
        matches_search && matches_category
    }
}

/// Campaign together with its derived display values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub progress_percentage: Decimal,
    pub raised_display: String,
    pub target_display: String,
    pub raised_compact: String,
}

impl CampaignSummary {
    pub fn new(campaign: Campaign, currency: &str) -> Self {
        Self {
            progress_percentage: campaign.progress_percentage(),
            raised_display: format_currency(campaign.raised_amount, currency),
            target_display: format_currency(campaign.target_amount, currency),
            raised_compact: format_compact_number(campaign.raised_amount),
            campaign,
        }
    }
}
