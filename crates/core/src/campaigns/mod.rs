//! Campaigns module - catalog models, service, and traits.

mod campaigns_constants;
mod campaigns_model;
mod campaigns_service;
mod campaigns_traits;

#[cfg(test)]
mod campaigns_service_tests;

// Re-export the public interface
pub use campaigns_constants::seed_campaigns;
pub use campaigns_model::{
    Campaign, CampaignQuery, CampaignSort, CampaignSummary, CampaignUpdate, NewCampaign,
};
pub use campaigns_service::CampaignCatalog;
pub use campaigns_traits::{CampaignComparator, CampaignFilter, CampaignCatalogTrait};
