//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::{SentimentClassifier, ServerDeps};
use crate::server::routes::{
    health_handler, list_services_handler, provider_details_handler, search_services_handler,
    submit_review_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, sentiment: Arc<dyn SentimentClassifier>) -> Router {
    let deps = Arc::new(ServerDeps::new(pool.clone(), sentiment));
    let state = AxumAppState {
        db_pool: pool,
        deps,
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/search_services", post(search_services_handler))
        .route("/submit_review", post(submit_review_handler))
        .route("/provider/:provider_id", get(provider_details_handler))
        .route("/services", get(list_services_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
