use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::RatingSet;
use crate::domains::reputation::contacts::ContactReview;
use crate::domains::reviews::models::Review;

/// Input for submitting a review
///
/// Ratings arrive as the four named fields; anything else in the payload
/// is rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitReviewInput {
    pub provider_id: String,
    pub reviewer_phone: String,
    pub punctuality: i16,
    pub skill_quality: i16,
    pub politeness: i16,
    pub pricing: i16,
    pub review_text: String,
}

impl SubmitReviewInput {
    /// The four scores as a rating set (not yet range-validated).
    pub fn ratings(&self) -> RatingSet {
        RatingSet {
            punctuality: self.punctuality,
            skill_quality: self.skill_quality,
            politeness: self.politeness,
            pricing: self.pricing,
        }
    }
}

/// Response after a successful review submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReviewResponse {
    pub review_id: String,
    pub provider_id: String,
}

/// A contact's review as surfaced in search and detail views
#[derive(Debug, Clone, Serialize)]
pub struct ContactReviewData {
    /// Redacted reviewer identity (trailing phone fragment).
    pub reviewer: String,
    pub text: String,
    pub ratings: RatingSet,
}

impl From<ContactReview> for ContactReviewData {
    fn from(review: ContactReview) -> Self {
        Self {
            reviewer: review.masked_identity,
            text: review.text,
            ratings: review.ratings,
        }
    }
}

/// A recent review in the provider detail view
#[derive(Debug, Clone, Serialize)]
pub struct RecentReviewData {
    pub text: String,
    pub ratings: RatingSet,
    pub timestamp: DateTime<Utc>,
}

impl From<&Review> for RecentReviewData {
    fn from(review: &Review) -> Self {
        Self {
            text: review.review_text.clone(),
            ratings: review.ratings,
            timestamp: review.created_at,
        }
    }
}
