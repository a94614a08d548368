use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::common::DirectoryError;
use crate::domains::providers::activities::search_providers;
use crate::domains::providers::data::SearchResponse;
use crate::server::app::AxumAppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub service_type: String,
    pub location: String,
    #[serde(default)]
    pub user_contacts: Vec<String>,
}

/// Search for local service providers
pub async fn search_services_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, DirectoryError> {
    let response = search_providers(
        &request.service_type,
        &request.location,
        &request.user_contacts,
        &state.deps,
    )
    .await?;
    Ok(Json(response))
}
