//! Review mutation activities

use sqlx::PgPool;
use tracing::info;

use crate::common::{DirectoryError, ProviderId};
use crate::domains::insights::refresh_provider_insights;
use crate::domains::providers::models::Provider;
use crate::domains::reputation::aggregate;
use crate::domains::reviews::data::{SubmitReviewInput, SubmitReviewResponse};
use crate::domains::reviews::models::{CreateReview, Review};
use crate::kernel::ServerDeps;

/// Submit a review and bring the provider's derived state up to date.
///
/// Validation happens before any write: an out-of-range score rejects the
/// whole review, and an unknown provider is a not-found, never an empty
/// aggregate. The stats recompute reads the full review set including the
/// row just inserted.
pub async fn submit_review(
    input: SubmitReviewInput,
    deps: &ServerDeps,
) -> Result<SubmitReviewResponse, DirectoryError> {
    let ratings = input.ratings();
    ratings.validate()?;

    let provider_id =
        ProviderId::parse(&input.provider_id).map_err(|_| DirectoryError::ProviderNotFound)?;
    Provider::find_by_id_optional(provider_id, &deps.db_pool)
        .await?
        .ok_or(DirectoryError::ProviderNotFound)?;

    info!(provider_id = %provider_id, "Submitting review");

    let review = Review::create(
        CreateReview {
            provider_id,
            reviewer_phone: input.reviewer_phone,
            ratings,
            review_text: input.review_text,
        },
        &deps.db_pool,
    )
    .await?;

    update_provider_stats(provider_id, &deps.db_pool).await?;
    refresh_provider_insights(provider_id, deps).await?;

    Ok(SubmitReviewResponse {
        review_id: review.id.to_string(),
        provider_id: provider_id.to_string(),
    })
}

/// Recompute a provider's derived rating fields from its full review set
pub async fn update_provider_stats(
    provider_id: ProviderId,
    pool: &PgPool,
) -> Result<(), DirectoryError> {
    let rating_sets = Review::rating_sets_for_provider(provider_id, pool).await?;

    let (avg_rating, total_reviews) = match aggregate(&rating_sets) {
        Some(stats) => (stats.overall_rating, stats.review_count as i32),
        None => (0.0, 0),
    };

    Provider::update_stats(provider_id, avg_rating, total_reviews, pool).await?;

    info!(
        provider_id = %provider_id,
        avg_rating,
        total_reviews,
        "Updated provider stats"
    );
    Ok(())
}
