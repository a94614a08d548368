use axum::{extract::Extension, Json};

use crate::common::DirectoryError;
use crate::domains::providers::activities::list_services;
use crate::domains::providers::data::ServicesResponse;
use crate::server::app::AxumAppState;

/// List available service types and locations
pub async fn list_services_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<ServicesResponse>, DirectoryError> {
    let response = list_services(&state.deps).await?;
    Ok(Json(response))
}
