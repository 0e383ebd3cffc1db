use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use karuna_core::metrics::{
    format_compact_number, format_currency, impact_estimate, tax_benefit, ImpactEstimate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct ImpactQuery {
    amount: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImpactResponse {
    amount: Decimal,
    amount_display: String,
    tax_benefit: Decimal,
    impact: ImpactEstimate,
}

/// Headline numbers of the landing page.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlatformSummary {
    campaign_count: usize,
    urgent_count: usize,
    total_raised: Decimal,
    total_raised_display: String,
    total_raised_compact: String,
    total_donors: u64,
    /// Raised before the ledger existed (seed data)
    opening_balance: Decimal,
    credited_total: Decimal,
    unattributed_total: Decimal,
    total_donated: Decimal,
    total_donated_display: String,
}

async fn impact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImpactQuery>,
) -> ApiResult<Json<ImpactResponse>> {
    if query.amount < Decimal::ZERO {
        return Err(ApiError::BadRequest("amount cannot be negative".to_string()));
    }
    Ok(Json(ImpactResponse {
        amount: query.amount,
        amount_display: format_currency(query.amount, &state.currency),
        tax_benefit: tax_benefit(query.amount),
        impact: impact_estimate(query.amount),
    }))
}

async fn summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<PlatformSummary>> {
    let campaigns = state.catalog.get_all()?;
    let balance = state.ledger.balance()?;
    let total_raised = balance.raised_total();
    let total_donated = balance.total_donated;

    Ok(Json(PlatformSummary {
        campaign_count: campaigns.len(),
        urgent_count: campaigns.iter().filter(|c| c.is_urgent).count(),
        total_raised,
        total_raised_display: format_currency(total_raised, &state.currency),
        total_raised_compact: format_compact_number(total_raised),
        total_donors: campaigns.iter().map(|c| c.donor_count).sum(),
        opening_balance: balance.opening_total,
        credited_total: balance.credited_total,
        unattributed_total: balance.unattributed_total,
        total_donated,
        total_donated_display: format_currency(total_donated, &state.currency),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics/impact", get(impact))
        .route("/metrics/summary", get(summary))
}
