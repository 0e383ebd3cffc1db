//! Property-based integration tests for the donation ledger and derived metrics.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::sync::Arc;

use karuna_core::campaigns::{CampaignCatalog, CampaignCatalogTrait, NewCampaign};
use karuna_core::donations::{DonationLedger, DonationLedgerTrait, NewDonation};
use karuna_core::metrics::{impact_estimate, progress_percentage, tax_benefit};
use proptest::prelude::*;
use rust_decimal::Decimal;

const CAMPAIGN_IDS: [&str; 3] = ["1", "2", "3"];

// =============================================================================
// Generators
// =============================================================================

/// Generates a money amount with two decimal places.
fn arb_amount(max_paise: i64) -> impl Strategy<Value = Decimal> {
    (-max_paise..=max_paise).prop_map(|paise| Decimal::new(paise, 2))
}

/// Generates a positive donation amount.
fn arb_positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

/// Generates a campaign reference: a known id, an unknown id, or none.
fn arb_campaign_ref() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("missing".to_string())),
        (0..CAMPAIGN_IDS.len()).prop_map(|i| Some(CAMPAIGN_IDS[i].to_string())),
    ]
}

fn arb_donations(max_count: usize) -> impl Strategy<Value = Vec<(Decimal, Option<String>)>> {
    proptest::collection::vec((arb_positive_amount(), arb_campaign_ref()), 0..=max_count)
}

fn catalog() -> Arc<CampaignCatalog> {
    let catalog = CampaignCatalog::new();
    for (i, id) in CAMPAIGN_IDS.iter().enumerate() {
        catalog
            .add(NewCampaign {
                id: Some(id.to_string()),
                title: format!("Campaign {}", id),
                description: String::new(),
                category: "Community".to_string(),
                location: "Pune".to_string(),
                target_amount: Decimal::new(5_000_000, 0),
                // Opening balances must not count toward the ledger
                raised_amount: Decimal::new(1_000 * i as i64, 0),
                donor_count: 0,
                is_urgent: false,
                image_url: None,
                end_date: None,
                beneficiaries: None,
                story: None,
            })
            .unwrap();
    }
    Arc::new(catalog)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Progress is always a percentage, whatever the raised and target amounts.
    #[test]
    fn prop_progress_stays_within_bounds(
        raised in arb_amount(1_000_000_000),
        target in arb_amount(1_000_000_000),
    ) {
        let progress = progress_percentage(raised, target);
        prop_assert!(progress >= Decimal::ZERO);
        prop_assert!(progress <= Decimal::ONE_HUNDRED);
    }

    /// Tax benefit is a whole number never exceeding half the amount.
    #[test]
    fn prop_tax_benefit_is_floored_half(amount in arb_positive_amount()) {
        let benefit = tax_benefit(amount);
        prop_assert_eq!(benefit, benefit.trunc());
        prop_assert!(benefit * Decimal::TWO <= amount);
        prop_assert!((benefit + Decimal::ONE) * Decimal::TWO > amount);
    }

    /// Impact grows monotonically with the amount.
    #[test]
    fn prop_impact_is_monotonic(a in arb_positive_amount(), b in arb_positive_amount()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_impact = impact_estimate(low);
        let high_impact = impact_estimate(high);
        prop_assert!(low_impact.meals <= high_impact.meals);
        prop_assert!(low_impact.books <= high_impact.books);
        prop_assert!(low_impact.water <= high_impact.water);
    }

    /// The running total equals the sum of recorded amounts, which equals what
    /// was credited to campaigns plus the unattributed remainder.
    #[test]
    fn prop_ledger_total_matches_credits(donations in arb_donations(40)) {
        let catalog = catalog();
        let ledger = DonationLedger::new(catalog.clone());

        for (amount, campaign_id) in &donations {
            ledger
                .record(NewDonation {
                    amount: *amount,
                    campaign_id: campaign_id.clone(),
                    ..Default::default()
                })
                .unwrap();
        }

        let recorded: Decimal = donations.iter().map(|(amount, _)| *amount).sum();
        let credited: Decimal = catalog
            .get_all()
            .unwrap()
            .iter()
            .map(|c| c.ledger_credited())
            .sum();
        let total = ledger.total_donated().unwrap();

        prop_assert_eq!(total, recorded);
        prop_assert_eq!(credited + ledger.unattributed_total().unwrap(), total);
        let balance = ledger.balance().unwrap();
        prop_assert!(balance.is_balanced());
        prop_assert_eq!(balance.opening_total, Decimal::new(3_000, 0));

        let donors: u64 = catalog.get_all().unwrap().iter().map(|c| c.donor_count).sum();
        let attributed = donations
            .iter()
            .filter(|(_, id)| id.as_deref().is_some_and(|id| CAMPAIGN_IDS.contains(&id)))
            .count() as u64;
        prop_assert_eq!(donors, attributed);
    }
}
