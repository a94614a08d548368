use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ProviderId, RatingSet, ReviewId};

/// Review model - one reviewer's rated experience with one provider
///
/// Append-only: there is no update or delete path. The reviewer phone is
/// the identity key for contact matching and is never verified against a
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub provider_id: ProviderId,
    pub reviewer_phone: String,
    #[sqlx(flatten)]
    pub ratings: RatingSet,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new review
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub provider_id: ProviderId,
    pub reviewer_phone: String,
    pub ratings: RatingSet,
    pub review_text: String,
}

impl Review {
    /// Insert a review. Callers must have validated the rating range.
    pub async fn create(input: CreateReview, pool: &PgPool) -> Result<Self> {
        let review = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO reviews (
                provider_id, reviewer_phone,
                punctuality, skill_quality, politeness, pricing,
                review_text
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(input.provider_id)
        .bind(&input.reviewer_phone)
        .bind(input.ratings.punctuality)
        .bind(input.ratings.skill_quality)
        .bind(input.ratings.politeness)
        .bind(input.ratings.pricing)
        .bind(&input.review_text)
        .fetch_one(pool)
        .await?;
        Ok(review)
    }

    /// All reviews for a provider, oldest first (the store's natural order)
    pub async fn find_for_provider(provider_id: ProviderId, pool: &PgPool) -> Result<Vec<Self>> {
        let reviews = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM reviews
            WHERE provider_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(provider_id)
        .fetch_all(pool)
        .await?;
        Ok(reviews)
    }

    /// Just the rating sets for a provider, for stats recomputation
    pub async fn rating_sets_for_provider(
        provider_id: ProviderId,
        pool: &PgPool,
    ) -> Result<Vec<RatingSet>> {
        let ratings = sqlx::query_as::<_, RatingSet>(
            r#"
            SELECT punctuality, skill_quality, politeness, pricing
            FROM reviews
            WHERE provider_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(provider_id)
        .fetch_all(pool)
        .await?;
        Ok(ratings)
    }
}
