use axum::{extract::Extension, Json};

use crate::common::DirectoryError;
use crate::domains::reviews::activities::submit_review;
use crate::domains::reviews::data::{SubmitReviewInput, SubmitReviewResponse};
use crate::server::app::AxumAppState;

/// Submit a review for a provider
pub async fn submit_review_handler(
    Extension(state): Extension<AxumAppState>,
    Json(input): Json<SubmitReviewInput>,
) -> Result<Json<SubmitReviewResponse>, DirectoryError> {
    let response = submit_review(input, &state.deps).await?;
    Ok(Json(response))
}
