use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use karuna_core::campaigns::{CampaignQuery, CampaignSummary, CampaignUpdate, NewCampaign};
use karuna_core::Error;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_campaigns(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CampaignQuery>,
) -> ApiResult<Json<Vec<CampaignSummary>>> {
    let campaigns = state.catalog.search(&query)?;
    Ok(Json(
        campaigns
            .into_iter()
            .map(|c| CampaignSummary::new(c, &state.currency))
            .collect(),
    ))
}

async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Json(new_campaign): Json<NewCampaign>,
) -> ApiResult<Json<CampaignSummary>> {
    let campaign = state.catalog.add(new_campaign)?;
    Ok(Json(CampaignSummary::new(campaign, &state.currency)))
}

async fn get_campaign(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CampaignSummary>> {
    let campaign = state
        .catalog
        .get_by_id(&id)?
        .ok_or_else(|| Error::not_found("Campaign", id))?;
    Ok(Json(CampaignSummary::new(campaign, &state.currency)))
}

async fn update_campaign(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CampaignUpdate>,
) -> ApiResult<Json<CampaignSummary>> {
    let campaign = state.catalog.update(&id, update)?;
    Ok(Json(CampaignSummary::new(campaign, &state.currency)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route("/campaigns/{id}", get(get_campaign).put(update_campaign))
}
