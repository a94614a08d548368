use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::insights::models::AiInsight;
use crate::domains::providers::models::Provider;
use crate::domains::reputation::aggregate::AttributeScore;
use crate::domains::reviews::data::{ContactReviewData, RecentReviewData};

/// Provider data type for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderData {
    pub id: String,
    pub name: String,
    pub service_type: String,
    pub location: String,
    pub phone: Option<String>,
    pub rating: f64,
    pub total_reviews: i32,
}

impl From<Provider> for ProviderData {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id.to_string(),
            name: provider.name,
            service_type: provider.service_type,
            location: provider.location,
            phone: provider.phone_number,
            rating: provider.avg_rating,
            total_reviews: provider.total_reviews,
        }
    }
}

/// One attribute's percentage, flattened for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeScoreData {
    pub attribute: String,
    pub percentage: f64,
}

impl From<AttributeScore> for AttributeScoreData {
    fn from(score: AttributeScore) -> Self {
        Self {
            attribute: score.attribute.as_str().to_string(),
            percentage: score.percentage,
        }
    }
}

/// One provider in a search result, with reputation overlays
#[derive(Debug, Clone, Serialize)]
pub struct SearchProviderData {
    #[serde(flatten)]
    pub provider: ProviderData,
    pub has_contact_reviews: bool,
    /// Contact reviews, capped for display (presentation-layer cap).
    pub contact_reviews: Vec<ContactReviewData>,
    /// Every attribute's aggregate percentage, canonical order.
    pub strengths: Vec<AttributeScoreData>,
    /// The attribute with the highest percentage, if any reviews exist.
    pub top_strength: Option<AttributeScoreData>,
}

/// Response for a provider search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub service_type: String,
    pub location: String,
    /// Matching providers before truncation to the display limit.
    pub total_found: usize,
    pub providers: Vec<SearchProviderData>,
}

/// Reputation summary block of the provider detail view
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSummaryData {
    pub total_reviews: usize,
    pub has_contact_reviews: bool,
    pub top_strength: Option<AttributeScoreData>,
    pub main_concern: Option<AttributeScoreData>,
}

/// Cached AI insight maps for a provider
#[derive(Debug, Clone, Serialize)]
pub struct InsightData {
    pub top_praise: BTreeMap<String, f64>,
    pub top_concerns: BTreeMap<String, f64>,
    pub emerging_mentions: BTreeMap<String, f64>,
    pub updated_at: DateTime<Utc>,
}

impl From<AiInsight> for InsightData {
    fn from(insight: AiInsight) -> Self {
        Self {
            top_praise: insight.top_praise.0,
            top_concerns: insight.top_concerns.0,
            emerging_mentions: insight.emerging_mentions.0,
            updated_at: insight.updated_at,
        }
    }
}

/// Response for the provider detail view
#[derive(Debug, Clone, Serialize)]
pub struct ProviderDetailResponse {
    pub provider: ProviderData,
    /// Full matching set; not capped like search results.
    pub contact_reviews: Vec<ContactReviewData>,
    /// Attributes at or above the strength threshold, ranked descending.
    pub strengths: Vec<AttributeScoreData>,
    /// Attributes at or below the concern threshold, ranked descending.
    pub concerns: Vec<AttributeScoreData>,
    pub recent_reviews: Vec<RecentReviewData>,
    pub insights: Option<InsightData>,
    pub summary: ProviderSummaryData,
}

/// Response listing what the directory currently covers
#[derive(Debug, Clone, Serialize)]
pub struct ServicesResponse {
    pub service_types: Vec<String>,
    pub locations: Vec<String>,
    pub total_providers: i64,
}
