use std::sync::Arc;

use rust_decimal_macros::dec;

use crate::campaigns::*;
use crate::errors::Error;
use crate::events::{DomainEvent, MockDomainEventSink};

fn new_campaign(id: &str, title: &str, category: &str) -> NewCampaign {
    NewCampaign {
        id: Some(id.to_string()),
        title: title.to_string(),
        description: format!("{} description", title),
        category: category.to_string(),
        location: "Pune, Maharashtra".to_string(),
        target_amount: dec!(1000),
        raised_amount: dec!(0),
        donor_count: 0,
        is_urgent: false,
        image_url: None,
        end_date: None,
        beneficiaries: None,
        story: None,
    }
}

#[test]
fn test_get_by_id_miss_is_none() {
    let catalog = CampaignCatalog::new();
    assert!(catalog.get_by_id("missing").unwrap().is_none());
}

#[test]
fn test_add_and_get() {
    let catalog = CampaignCatalog::new();
    let added = catalog
        .add(new_campaign("c1", "School Books", "Education"))
        .unwrap();
    assert_eq!(added.id, "c1");
    assert_eq!(added.raised_amount, dec!(0));

    let fetched = catalog.get_by_id("c1").unwrap().unwrap();
    assert_eq!(fetched, added);
}

#[test]
fn test_add_generates_id_when_absent() {
    let catalog = CampaignCatalog::new();
    let mut campaign = new_campaign("ignored", "Water", "Water & Sanitation");
    campaign.id = None;
    let added = catalog.add(campaign).unwrap();
    assert!(!added.id.is_empty());
    assert!(catalog.get_by_id(&added.id).unwrap().is_some());
}

#[test]
fn test_add_duplicate_id_fails() {
    let catalog = CampaignCatalog::new();
    catalog
        .add(new_campaign("c1", "School Books", "Education"))
        .unwrap();
    let err = catalog
        .add(new_campaign("c1", "Another", "Healthcare"))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId { .. }));
    assert_eq!(catalog.get_by_id("c1").unwrap().unwrap().title, "School Books");
}

#[test]
fn test_add_rejects_invalid_input() {
    let catalog = CampaignCatalog::new();
    let mut campaign = new_campaign("c1", "   ", "Education");
    assert!(matches!(
        catalog.add(campaign.clone()).unwrap_err(),
        Error::Validation(_)
    ));
    campaign.title = "Books".to_string();
    campaign.target_amount = dec!(-1);
    assert!(matches!(
        catalog.add(campaign).unwrap_err(),
        Error::Validation(_)
    ));
    assert_eq!(catalog.get_all().unwrap().len(), 0);
}

#[test]
fn test_update_merges_fields() {
    let catalog = CampaignCatalog::new();
    catalog
        .add(new_campaign("c1", "School Books", "Education"))
        .unwrap();

    let updated = catalog
        .update(
            "c1",
            CampaignUpdate {
                title: Some("School Books & Uniform".to_string()),
                is_urgent: Some(true),
                target_amount: Some(dec!(2500)),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "School Books & Uniform");
    assert!(updated.is_urgent);
    assert_eq!(updated.target_amount, dec!(2500));
    assert_eq!(updated.category, "Education");
    assert_eq!(catalog.get_by_id("c1").unwrap().unwrap(), updated);
}

#[test]
fn test_update_missing_fails() {
    let catalog = CampaignCatalog::new();
    let err = catalog
        .update("nope", CampaignUpdate::default())
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_list_keeps_insertion_order_without_comparator() {
    let catalog = CampaignCatalog::new();
    for id in ["b", "a", "c"] {
        catalog.add(new_campaign(id, id, "Education")).unwrap();
    }
    let ids: Vec<String> = catalog.list(None, None).unwrap().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_list_with_filter_and_comparator() {
    let catalog = CampaignCatalog::new();
    catalog.add(new_campaign("1", "One", "Education")).unwrap();
    catalog.add(new_campaign("2", "Two", "Healthcare")).unwrap();
    catalog.add(new_campaign("3", "Three", "Education")).unwrap();

    let only_education: &CampaignFilter<'_> = &|c: &Campaign| c.category == "Education";
    let by_title: &CampaignComparator<'_> = &|a: &Campaign, b: &Campaign| a.title.cmp(&b.title);
    let titles: Vec<String> = catalog
        .list(Some(only_education), Some(by_title))
        .unwrap()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["One", "Three"]);
}

#[test]
fn test_list_accepts_closures_borrowing_locals() {
    let catalog = CampaignCatalog::new();
    catalog.add(new_campaign("1", "One", "Education")).unwrap();
    catalog.add(new_campaign("2", "Two", "Healthcare")).unwrap();
    catalog.add(new_campaign("3", "Three", "Healthcare")).unwrap();

    let wanted = String::from("Healthcare");
    let rank = vec!["3".to_string(), "2".to_string()];
    let position = |c: &Campaign| rank.iter().position(|id| *id == c.id);
    let filter: &CampaignFilter<'_> = &|c: &Campaign| c.category == wanted;
    let sort: &CampaignComparator<'_> =
        &|a: &Campaign, b: &Campaign| position(a).cmp(&position(b));

    let ids: Vec<String> = catalog
        .list(Some(filter), Some(sort))
        .unwrap()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn test_opening_balance_is_kept_apart_from_credits() {
    let catalog = CampaignCatalog::new();
    let mut seeded = new_campaign("c1", "Books", "Education");
    seeded.raised_amount = dec!(500);
    seeded.donor_count = 4;
    let added = catalog.add(seeded).unwrap();
    assert_eq!(added.opening_amount, dec!(500));
    assert_eq!(added.ledger_credited(), dec!(0));

    let credited = catalog.credit_donation("c1", dec!(120)).unwrap().unwrap();
    assert_eq!(credited.raised_amount, dec!(620));
    assert_eq!(credited.opening_amount, dec!(500));
    assert_eq!(credited.ledger_credited(), dec!(120));
}

#[test]
fn test_credit_donation_updates_counters() {
    let catalog = CampaignCatalog::new();
    catalog.add(new_campaign("c1", "Books", "Education")).unwrap();

    let credited = catalog.credit_donation("c1", dec!(200)).unwrap().unwrap();
    assert_eq!(credited.raised_amount, dec!(200));
    assert_eq!(credited.donor_count, 1);

    assert!(catalog.credit_donation("unknown", dec!(200)).unwrap().is_none());
    assert!(catalog.credit_donation("c1", dec!(0)).is_err());
}

#[test]
fn test_search_by_title_and_category() {
    let catalog = CampaignCatalog::with_campaigns(seed_campaigns()).unwrap();

    let query = CampaignQuery {
        search: Some("WATER".to_string()),
        category: None,
        sort: CampaignSort::Newest,
    };
    let found = catalog.search(&query).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "3");

    let query = CampaignQuery {
        search: None,
        category: Some("Education".to_string()),
        sort: CampaignSort::Newest,
    };
    let ids: Vec<String> = catalog.search(&query).unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["1", "7", "9"]);

    let query = CampaignQuery {
        search: None,
        category: Some("All Stories".to_string()),
        sort: CampaignSort::Newest,
    };
    assert_eq!(catalog.search(&query).unwrap().len(), 12);
}

#[test]
fn test_search_sort_orders() {
    let catalog = CampaignCatalog::with_campaigns(seed_campaigns()).unwrap();

    let urgent = catalog
        .search(&CampaignQuery {
            sort: CampaignSort::Urgent,
            ..Default::default()
        })
        .unwrap();
    let urgent_ids: Vec<&str> = urgent.iter().take(4).map(|c| c.id.as_str()).collect();
    assert_eq!(urgent_ids, vec!["2", "4", "5", "10"]);

    let loved = catalog
        .search(&CampaignQuery {
            sort: CampaignSort::MostLoved,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(loved[0].id, "10");

    let nearing = catalog
        .search(&CampaignQuery {
            sort: CampaignSort::NearingGoal,
            ..Default::default()
        })
        .unwrap();
    // 142000 / 150000
    assert_eq!(nearing[0].id, "2");
}

#[test]
fn test_replace_all_rejects_duplicates() {
    let catalog = CampaignCatalog::new();
    catalog.add(new_campaign("keep", "Keep", "Education")).unwrap();
    let existing = catalog.get_by_id("keep").unwrap().unwrap();

    let err = catalog
        .replace_all(vec![existing.clone(), existing.clone()])
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId { .. }));
    assert_eq!(catalog.get_all().unwrap().len(), 1);
}

#[test]
fn test_mutations_emit_events() {
    let sink = Arc::new(MockDomainEventSink::new());
    let catalog = CampaignCatalog::new().with_event_sink(sink.clone());
    catalog.add(new_campaign("c1", "Books", "Education")).unwrap();
    catalog
        .update(
            "c1",
            CampaignUpdate {
                story: Some("A story".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let _ = catalog.credit_donation("unknown", dec!(10)).unwrap();

    assert_eq!(
        sink.events(),
        vec![
            DomainEvent::campaigns_changed(vec!["c1".to_string()]),
            DomainEvent::campaigns_changed(vec!["c1".to_string()]),
        ]
    );
}

#[test]
fn test_summary_derives_display_values() {
    let catalog = CampaignCatalog::with_campaigns(seed_campaigns()).unwrap();
    let campaign = catalog.get_by_id("1").unwrap().unwrap();
    let summary = CampaignSummary::new(campaign, "INR");
    assert_eq!(summary.progress_percentage, dec!(74));
    assert_eq!(summary.raised_display, "₹18,500");
    assert_eq!(summary.target_display, "₹25,000");
    assert_eq!(summary.raised_compact, "18.5K");
}
