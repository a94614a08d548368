use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ProviderId;

/// Provider model - professionals in the service directory
///
/// `avg_rating` and `total_reviews` are derived fields: they are fully
/// recomputed from the complete review set on every review write, never
/// patched incrementally, and both stay 0 until the first review lands.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    /// Normalized lowercase category, e.g. "electrician".
    pub service_type: String,
    /// Normalized lowercase region, e.g. "mumbai".
    pub location: String,
    pub phone_number: Option<String>,
    pub avg_rating: f64,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new provider
#[derive(Debug, Clone)]
pub struct CreateProvider {
    pub name: String,
    pub service_type: String,
    pub location: String,
    pub phone_number: Option<String>,
}

impl Provider {
    /// Whether any reviews contribute to `avg_rating`.
    pub fn has_reviews(&self) -> bool {
        self.total_reviews > 0
    }

    /// Create a new provider. Category and region are stored lowercased.
    pub async fn create(input: CreateProvider, pool: &PgPool) -> Result<Self> {
        let provider = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO providers (name, service_type, location, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(input.service_type.to_lowercase())
        .bind(input.location.to_lowercase())
        .bind(&input.phone_number)
        .fetch_one(pool)
        .await?;
        Ok(provider)
    }

    /// Find provider by ID, `None` when missing
    pub async fn find_by_id_optional(id: ProviderId, pool: &PgPool) -> Result<Option<Self>> {
        let provider = sqlx::query_as::<_, Self>("SELECT * FROM providers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(provider)
    }

    /// Find all providers for an exact service type and location.
    ///
    /// Inputs must already be normalized to lowercase. Rows come back in
    /// the store's natural order (insertion time); ranking is the
    /// reputation engine's job, not the query's.
    pub async fn find_by_service_and_location(
        service_type: &str,
        location: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let providers = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM providers
            WHERE service_type = $1 AND location = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(service_type)
        .bind(location)
        .fetch_all(pool)
        .await?;
        Ok(providers)
    }

    /// IDs of every provider, for maintenance sweeps
    pub async fn all_ids(pool: &PgPool) -> Result<Vec<ProviderId>> {
        let ids = sqlx::query_scalar::<_, ProviderId>(
            "SELECT id FROM providers ORDER BY created_at ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(ids)
    }

    /// Distinct service types currently in the directory
    pub async fn distinct_service_types(pool: &PgPool) -> Result<Vec<String>> {
        let types = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT service_type FROM providers ORDER BY service_type ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(types)
    }

    /// Distinct locations currently in the directory
    pub async fn distinct_locations(pool: &PgPool) -> Result<Vec<String>> {
        let locations = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT location FROM providers ORDER BY location ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(locations)
    }

    /// Total provider count
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM providers")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Write back both derived reputation fields together.
    pub async fn update_stats(
        id: ProviderId,
        avg_rating: f64,
        total_reviews: i32,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query("UPDATE providers SET avg_rating = $2, total_reviews = $3 WHERE id = $1")
            .bind(id)
            .bind(avg_rating)
            .bind(total_reviews)
            .execute(pool)
            .await?;
        Ok(())
    }
}
