use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::ProviderId;

/// Cached insight maps for one provider
///
/// All three maps are keyed by attribute or theme name and hold
/// one-decimal percentages.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AiInsight {
    pub provider_id: ProviderId,
    /// Strength attributes and their percentages.
    pub top_praise: Json<BTreeMap<String, f64>>,
    /// Concern attributes and their percentages.
    pub top_concerns: Json<BTreeMap<String, f64>>,
    /// Themes and the share of reviews mentioning them.
    pub emerging_mentions: Json<BTreeMap<String, f64>>,
    pub updated_at: DateTime<Utc>,
}

impl AiInsight {
    /// Find the cached insight row for a provider, if one has been computed
    pub async fn find_for_provider(
        provider_id: ProviderId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let insight =
            sqlx::query_as::<_, Self>("SELECT * FROM ai_insights WHERE provider_id = $1")
                .bind(provider_id)
                .fetch_optional(pool)
                .await?;
        Ok(insight)
    }

    /// Replace a provider's insight maps wholesale
    pub async fn upsert(
        provider_id: ProviderId,
        top_praise: BTreeMap<String, f64>,
        top_concerns: BTreeMap<String, f64>,
        emerging_mentions: BTreeMap<String, f64>,
        pool: &PgPool,
    ) -> Result<Self> {
        let insight = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO ai_insights (provider_id, top_praise, top_concerns, emerging_mentions, updated_at)
            VALUES ($1, $2, $3, $4, now())
            ON CONFLICT (provider_id)
            DO UPDATE SET
                top_praise = EXCLUDED.top_praise,
                top_concerns = EXCLUDED.top_concerns,
                emerging_mentions = EXCLUDED.emerging_mentions,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(provider_id)
        .bind(Json(top_praise))
        .bind(Json(top_concerns))
        .bind(Json(emerging_mentions))
        .fetch_one(pool)
        .await?;
        Ok(insight)
    }
}
