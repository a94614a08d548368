use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde::Deserialize;

use crate::common::DirectoryError;
use crate::domains::providers::activities::get_provider_details;
use crate::domains::providers::data::ProviderDetailResponse;
use crate::server::app::AxumAppState;

#[derive(Debug, Deserialize)]
pub struct ProviderDetailQuery {
    /// Comma-separated phone numbers from the caller's contact list.
    #[serde(default)]
    pub contacts: String,
}

/// Get detailed provider information
pub async fn provider_details_handler(
    Extension(state): Extension<AxumAppState>,
    Path(provider_id): Path<String>,
    Query(query): Query<ProviderDetailQuery>,
) -> Result<Json<ProviderDetailResponse>, DirectoryError> {
    let user_contacts: Vec<String> = query
        .contacts
        .split(',')
        .filter(|number| !number.is_empty())
        .map(str::to_string)
        .collect();

    let response = get_provider_details(&provider_id, &user_contacts, &state.deps).await?;
    Ok(Json(response))
}
