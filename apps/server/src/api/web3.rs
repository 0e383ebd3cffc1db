use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use karuna_core::web3::{MilestoneData, Transaction, TransactionStatus, WalletSession};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContractDonation {
    campaign_id: String,
    /// Amount in ether
    amount: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MilestoneSubmission {
    campaign_id: String,
    milestone: MilestoneData,
}

#[derive(Deserialize)]
struct TransactionStatusUpdate {
    status: TransactionStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionSubmitted {
    tx_hash: String,
}

async fn get_session(State(state): State<Arc<AppState>>) -> ApiResult<Json<WalletSession>> {
    Ok(Json(state.web3_service.session()?))
}

async fn connect_wallet(State(state): State<Arc<AppState>>) -> ApiResult<Json<WalletSession>> {
    Ok(Json(state.web3_service.connect_wallet().await?))
}

async fn disconnect_wallet(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<WalletSession>> {
    Ok(Json(state.web3_service.disconnect_wallet()?))
}

async fn donate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContractDonation>,
) -> ApiResult<Json<TransactionSubmitted>> {
    let tx_hash = state
        .web3_service
        .donate_to_contract(&payload.campaign_id, &payload.amount)
        .await?;
    Ok(Json(TransactionSubmitted { tx_hash }))
}

async fn submit_milestone(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MilestoneSubmission>,
) -> ApiResult<Json<TransactionSubmitted>> {
    let tx_hash = state
        .web3_service
        .submit_milestone(&payload.campaign_id, payload.milestone)
        .await?;
    Ok(Json(TransactionSubmitted { tx_hash }))
}

async fn verify_milestone(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TransactionSubmitted>> {
    let tx_hash = state.web3_service.verify_milestone(&id).await?;
    Ok(Json(TransactionSubmitted { tx_hash }))
}

async fn update_transaction(
    Path(hash): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<TransactionStatusUpdate>,
) -> ApiResult<Json<Transaction>> {
    let transaction = state
        .web3_service
        .update_transaction_status(&hash, update.status)?;
    Ok(Json(transaction))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/web3/session", get(get_session))
        .route("/web3/connect", post(connect_wallet))
        .route("/web3/disconnect", post(disconnect_wallet))
        .route("/web3/donate", post(donate))
        .route("/web3/milestones", post(submit_milestone))
        .route("/web3/milestones/{id}/verify", post(verify_milestone))
        .route("/web3/transactions/{hash}", put(update_transaction))
}
