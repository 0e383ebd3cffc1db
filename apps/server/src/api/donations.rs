use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use karuna_core::constants::GENERAL_FUND_LABEL;
use karuna_core::donations::{
    DonationStatus, DonationView, NewDonation, SettlementConfirmation,
};
use karuna_core::metrics::{format_date, impact_estimate, ImpactEstimate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DonationListQuery {
    campaign_id: Option<String>,
}

/// What the donor sees after a successful donation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DonationReceipt {
    #[serde(flatten)]
    donation: DonationView,
    /// Title of the credited campaign, or the general fund
    credited_to: String,
    donated_on: String,
    is_attributed: bool,
    tax_benefit: Decimal,
    impact: ImpactEstimate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DonationTotals {
    total_donated: Decimal,
    unattributed_total: Decimal,
    by_campaign: HashMap<String, Decimal>,
}

#[derive(Deserialize)]
struct StatusUpdate {
    status: DonationStatus,
}

async fn list_donations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DonationListQuery>,
) -> ApiResult<Json<Vec<DonationView>>> {
    let donations = match query.campaign_id {
        Some(campaign_id) => state.ledger.donations_for_campaign(&campaign_id)?,
        None => state.ledger.list_donations()?,
    };
    Ok(Json(donations.iter().map(DonationView::from).collect()))
}

async fn record_donation(
    State(state): State<Arc<AppState>>,
    Json(new_donation): Json<NewDonation>,
) -> ApiResult<Json<DonationReceipt>> {
    let donation = state.ledger.record(new_donation)?;
    let credited_to = match donation.campaign_id.as_deref() {
        Some(campaign_id) if donation.is_attributed => state
            .catalog
            .get_by_id(campaign_id)?
            .map(|c| c.title)
            .unwrap_or_else(|| GENERAL_FUND_LABEL.to_string()),
        _ => GENERAL_FUND_LABEL.to_string(),
    };
    Ok(Json(DonationReceipt {
        donation: DonationView::from(&donation),
        credited_to,
        donated_on: format_date(donation.timestamp.date_naive()),
        is_attributed: donation.is_attributed,
        tax_benefit: donation.tax_benefit,
        impact: impact_estimate(donation.amount),
    }))
}

async fn donation_totals(State(state): State<Arc<AppState>>) -> ApiResult<Json<DonationTotals>> {
    Ok(Json(DonationTotals {
        total_donated: state.ledger.total_donated()?,
        unattributed_total: state.ledger.unattributed_total()?,
        by_campaign: state.ledger.totals_by_campaign()?,
    }))
}

async fn update_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<StatusUpdate>,
) -> ApiResult<Json<DonationView>> {
    let donation = state.ledger.set_status(&id, update.status)?;
    Ok(Json(DonationView::from(&donation)))
}

async fn settle_donation(
    State(state): State<Arc<AppState>>,
    Json(confirmation): Json<SettlementConfirmation>,
) -> ApiResult<Json<DonationView>> {
    let donation = state.ledger.settle(confirmation)?;
    Ok(Json(DonationView::from(&donation)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/donations", get(list_donations).post(record_donation))
        .route("/donations/totals", get(donation_totals))
        .route("/donations/settlements", post(settle_donation))
        .route("/donations/{id}/status", put(update_status))
}
