use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use karuna_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                CoreError::DuplicateId { .. } | CoreError::InvalidTransition { .. } => {
                    StatusCode::CONFLICT
                }
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::ExternalProvider(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use karuna_core::errors::{ProviderError, ValidationError};

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::not_found("Campaign", "9"), StatusCode::NOT_FOUND),
            (CoreError::duplicate("Campaign", "1"), StatusCode::CONFLICT),
            (
                CoreError::InvalidTransition {
                    entity: "Donation",
                    id: "DN1".to_string(),
                    from: "completed".to_string(),
                    to: "failed".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                CoreError::Validation(ValidationError::MissingField("title".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ExternalProvider(ProviderError::NotInstalled),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::Snapshot("bad".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
