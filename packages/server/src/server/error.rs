//! HTTP mapping for domain errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::common::DirectoryError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match &self {
            DirectoryError::OutOfRangeRating { .. } => StatusCode::BAD_REQUEST,
            DirectoryError::ProviderNotFound => StatusCode::NOT_FOUND,
            DirectoryError::Internal(error) => {
                tracing::error!(error = %error, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
