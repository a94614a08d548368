//! Provider query activities

use std::collections::HashSet;

use tracing::info;

use crate::common::{DirectoryError, ProviderId, RatingSet};
use crate::domains::insights::models::AiInsight;
use crate::domains::providers::data::{
    InsightData, ProviderData, ProviderDetailResponse, ProviderSummaryData, SearchProviderData,
    SearchResponse, ServicesResponse,
};
use crate::domains::providers::models::Provider;
use crate::domains::reputation::{
    aggregate, match_contact_reviews, rank_providers, summarize, ReputationSummary,
};
use crate::domains::reviews::data::{ContactReviewData, RecentReviewData};
use crate::domains::reviews::models::Review;
use crate::kernel::ServerDeps;

/// Search results surface at most this many contact reviews per provider.
const SEARCH_CONTACT_REVIEW_LIMIT: usize = 2;

/// Provider detail views surface the last N reviews.
const RECENT_REVIEW_LIMIT: usize = 3;

/// Search providers by service type and location, ranked by reputation
pub async fn search_providers(
    service_type: &str,
    location: &str,
    user_contacts: &[String],
    deps: &ServerDeps,
) -> Result<SearchResponse, DirectoryError> {
    let service_type = service_type.to_lowercase();
    let location = location.to_lowercase();

    info!(service_type = %service_type, location = %location, "Searching providers");

    let candidates =
        Provider::find_by_service_and_location(&service_type, &location, &deps.db_pool).await?;
    let ranked = rank_providers(candidates);

    let contact_numbers: HashSet<String> = user_contacts.iter().cloned().collect();

    let mut providers = Vec::with_capacity(ranked.providers.len());
    for provider in ranked.providers {
        let reviews = Review::find_for_provider(provider.id, &deps.db_pool).await?;

        let mut contact_reviews: Vec<ContactReviewData> =
            match_contact_reviews(&reviews, &contact_numbers)
                .into_iter()
                .map(Into::into)
                .collect();
        let has_contact_reviews = !contact_reviews.is_empty();
        contact_reviews.truncate(SEARCH_CONTACT_REVIEW_LIMIT);

        let rating_sets: Vec<RatingSet> = reviews.iter().map(|r| r.ratings).collect();
        let stats = aggregate(&rating_sets);

        let strengths = stats
            .as_ref()
            .map(|stats| stats.attributes.iter().copied().map(Into::into).collect())
            .unwrap_or_default();
        let top_strength = stats
            .as_ref()
            .and_then(|stats| stats.top_attribute())
            .copied()
            .map(Into::into);

        providers.push(SearchProviderData {
            provider: ProviderData::from(provider),
            has_contact_reviews,
            contact_reviews,
            strengths,
            top_strength,
        });
    }

    Ok(SearchResponse {
        service_type,
        location,
        total_found: ranked.total_found,
        providers,
    })
}

/// Full detail view of one provider, with contact and reputation overlays
pub async fn get_provider_details(
    provider_id: &str,
    user_contacts: &[String],
    deps: &ServerDeps,
) -> Result<ProviderDetailResponse, DirectoryError> {
    let id = ProviderId::parse(provider_id).map_err(|_| DirectoryError::ProviderNotFound)?;

    info!(provider_id = %id, "Getting provider details");

    let provider = Provider::find_by_id_optional(id, &deps.db_pool)
        .await?
        .ok_or(DirectoryError::ProviderNotFound)?;

    let reviews = Review::find_for_provider(id, &deps.db_pool).await?;

    let contact_numbers: HashSet<String> = user_contacts.iter().cloned().collect();
    let contact_reviews: Vec<ContactReviewData> =
        match_contact_reviews(&reviews, &contact_numbers)
            .into_iter()
            .map(Into::into)
            .collect();

    let rating_sets: Vec<RatingSet> = reviews.iter().map(|r| r.ratings).collect();
    let summary = match aggregate(&rating_sets) {
        Some(stats) => summarize(&stats),
        None => ReputationSummary::empty(),
    };

    let recent_reviews: Vec<RecentReviewData> = reviews
        .iter()
        .skip(reviews.len().saturating_sub(RECENT_REVIEW_LIMIT))
        .map(RecentReviewData::from)
        .collect();

    let insights = AiInsight::find_for_provider(id, &deps.db_pool)
        .await?
        .map(InsightData::from);

    Ok(ProviderDetailResponse {
        provider: ProviderData::from(provider),
        summary: ProviderSummaryData {
            total_reviews: reviews.len(),
            has_contact_reviews: !contact_reviews.is_empty(),
            top_strength: summary.top_strength().copied().map(Into::into),
            main_concern: summary.main_concern().copied().map(Into::into),
        },
        contact_reviews,
        strengths: summary.strengths.into_iter().map(Into::into).collect(),
        concerns: summary.concerns.into_iter().map(Into::into).collect(),
        recent_reviews,
        insights,
    })
}

/// List the service types and locations the directory currently covers
pub async fn list_services(deps: &ServerDeps) -> Result<ServicesResponse, DirectoryError> {
    info!("Listing available services");

    let service_types = Provider::distinct_service_types(&deps.db_pool).await?;
    let locations = Provider::distinct_locations(&deps.db_pool).await?;
    let total_providers = Provider::count(&deps.db_pool).await?;

    Ok(ServicesResponse {
        service_types,
        locations,
        total_providers,
    })
}
