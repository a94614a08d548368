use std::sync::Arc;

use sqlx::PgPool;

use crate::kernel::sentiment::SentimentClassifier;

/// Shared dependencies injected into activities
///
/// Passed explicitly everywhere; no ambient globals. Swapping the
/// sentiment classifier for a stub keeps the activities unit-testable.
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Opaque text -> polarity capability; never a concrete model here.
    pub sentiment: Arc<dyn SentimentClassifier>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(db_pool: PgPool, sentiment: Arc<dyn SentimentClassifier>) -> Self {
        Self { db_pool, sentiment }
    }
}
