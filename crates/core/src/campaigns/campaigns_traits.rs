//! Campaign catalog traits.
//!
//! The catalog is the exclusive owner of campaign records. Donations refer to
//! campaigns by id only and never imply cascading changes. Crediting a
//! donation is not part of this contract: only `DonationLedger` can move
//! `raised_amount`, through `CampaignCatalog`.

use std::cmp::Ordering;

use super::campaigns_model::{Campaign, CampaignQuery, CampaignUpdate, NewCampaign};
use crate::errors::Result;

/// Caller-supplied predicate for [`CampaignCatalogTrait::list`]. May borrow
/// from the caller for `'a`.
pub type CampaignFilter<'a> = dyn Fn(&Campaign) -> bool + 'a;

/// Caller-supplied ordering for [`CampaignCatalogTrait::list`].
pub type CampaignComparator<'a> = dyn Fn(&Campaign, &Campaign) -> Ordering + 'a;

/// Trait defining the contract for the campaign catalog.
pub trait CampaignCatalogTrait: Send + Sync {
    /// Looks up a campaign. A miss is `Ok(None)`, not an error.
    fn get_by_id(&self, campaign_id: &str) -> Result<Option<Campaign>>;

    /// Inserts a new campaign.
    ///
    /// Fails with `DuplicateId` if the id is already present.
    fn add(&self, new_campaign: NewCampaign) -> Result<Campaign>;

    /// Merges the given fields into an existing campaign.
    ///
    /// Fails with `NotFound` if the campaign is absent.
    fn update(&self, campaign_id: &str, update: CampaignUpdate) -> Result<Campaign>;

    /// Returns the campaigns accepted by `filter`, ordered by `sort`.
    ///
    /// Without a comparator, catalog insertion order is kept. Sorting is stable.
    fn list(
        &self,
        filter: Option<&CampaignFilter<'_>>,
        sort: Option<&CampaignComparator<'_>>,
    ) -> Result<std::vec::IntoIter<Campaign>>;

    /// Applies the campaign browser's search, category and sort options.
    fn search(&self, query: &CampaignQuery) -> Result<Vec<Campaign>> {
        let filter: &CampaignFilter<'_> = &|c: &Campaign| query.matches(c);
        let sort: &CampaignComparator<'_> =
            &|a: &Campaign, b: &Campaign| query.sort.compare(a, b);
        Ok(self.list(Some(filter), Some(sort))?.collect())
    }

    /// Replaces the catalog contents, e.g. when restoring a snapshot.
    fn replace_all(&self, campaigns: Vec<Campaign>) -> Result<()>;

    /// All campaigns in catalog order.
    fn get_all(&self) -> Result<Vec<Campaign>> {
        Ok(self.list(None, None)?.collect())
    }
}
