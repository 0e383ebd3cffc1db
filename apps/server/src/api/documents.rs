use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use karuna_core::documents::{Document, DocumentType, NewDocument};
use karuna_core::metrics::format_file_size;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentListQuery {
    #[serde(rename = "type")]
    doc_type: Option<DocumentType>,
    campaign_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentUpload {
    #[serde(flatten)]
    metadata: NewDocument,
    /// Base64-encoded file content
    content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest {
    verified_by: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentView {
    #[serde(flatten)]
    document: Document,
    size_label: String,
}

impl From<Document> for DocumentView {
    fn from(document: Document) -> Self {
        let size_label = format_file_size(document.size);
        Self {
            document,
            size_label,
        }
    }
}

async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocumentListQuery>,
) -> ApiResult<Json<Vec<DocumentView>>> {
    let service = &state.document_service;
    let mut documents = match &query.campaign_id {
        Some(campaign_id) => service.documents_by_campaign(campaign_id)?,
        None => service.list_documents()?,
    };
    if let Some(doc_type) = query.doc_type {
        documents.retain(|d| d.doc_type == doc_type);
    }
    Ok(Json(documents.into_iter().map(DocumentView::from).collect()))
}

async fn upload_document(
    State(state): State<Arc<AppState>>,
    Json(upload): Json<DocumentUpload>,
) -> ApiResult<Json<DocumentView>> {
    let bytes = BASE64
        .decode(upload.content.as_bytes())
        .map_err(|e| ApiError::BadRequest(format!("content is not valid base64: {}", e)))?;
    let document = state
        .document_service
        .upload_document(upload.metadata, bytes)
        .await?;
    Ok(Json(document.into()))
}

async fn verify_document(
    Path(hash): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<DocumentView>> {
    let document = state
        .document_service
        .verify_document(&hash, &request.verified_by)?;
    Ok(Json(document.into()))
}

async fn document_content(
    Path(hash): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let bytes = state.document_service.document_content(&hash).await?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], bytes))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/documents", get(list_documents).post(upload_document))
        .route("/documents/{hash}/verify", post(verify_document))
        .route("/documents/{hash}/content", get(document_content))
}
