//! Rating aggregation: per-review integer scores to provider-level statistics.
//!
//! Pure functions over already-fetched rating sets. Zero reviews is a
//! first-class state (`None`), never a division by zero.

use serde::Serialize;

use crate::common::{RatingAttribute, RatingSet, MAX_RATING};

/// One attribute's aggregate percentage on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeScore {
    pub attribute: RatingAttribute,
    pub percentage: f64,
}

/// Derived per-provider statistics, recomputed from the full review set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Mean of per-review means, rounded to one decimal. On the 1-5 scale.
    pub overall_rating: f64,
    /// Number of contributing reviews.
    pub review_count: usize,
    /// Percentage strength per attribute, in canonical attribute order.
    pub attributes: Vec<AttributeScore>,
}

impl AggregateStats {
    /// Percentage for a single attribute.
    pub fn percentage(&self, attribute: RatingAttribute) -> Option<f64> {
        self.attributes
            .iter()
            .find(|score| score.attribute == attribute)
            .map(|score| score.percentage)
    }

    /// The attribute with the highest percentage, ties broken by canonical
    /// attribute order. Unlike the summarizer this applies no threshold.
    pub fn top_attribute(&self) -> Option<&AttributeScore> {
        let mut top: Option<&AttributeScore> = None;
        for score in &self.attributes {
            if top.map_or(true, |t| score.percentage > t.percentage) {
                top = Some(score);
            }
        }
        top
    }
}

/// Round half-up to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate a provider's rating sets into `AggregateStats`.
///
/// Each attribute's percentage is `round(mean(scores) / 5 * 100, 1)`.
/// The overall rating is the mean, across reviews, of each review's own
/// per-review mean - not a flat mean of all raw scores. Returns `None`
/// for an empty input: callers must treat "no reviews" as distinct from
/// "all reviews rated minimally".
pub fn aggregate(ratings: &[RatingSet]) -> Option<AggregateStats> {
    if ratings.is_empty() {
        return None;
    }

    let review_count = ratings.len();

    let attributes = RatingAttribute::ALL
        .into_iter()
        .map(|attribute| {
            let sum: i64 = ratings.iter().map(|set| i64::from(set.get(attribute))).sum();
            let mean = sum as f64 / review_count as f64;
            AttributeScore {
                attribute,
                percentage: round_to_tenth(mean / f64::from(MAX_RATING) * 100.0),
            }
        })
        .collect();

    let overall_rating = round_to_tenth(
        ratings.iter().map(RatingSet::mean).sum::<f64>() / review_count as f64,
    );

    Some(AggregateStats {
        overall_rating,
        review_count,
        attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: i16) -> RatingSet {
        RatingSet {
            punctuality: score,
            skill_quality: score,
            politeness: score,
            pricing: score,
        }
    }

    #[test]
    fn test_empty_input_is_none() {
        assert!(aggregate(&[]).is_none());
    }

    #[test]
    fn test_all_fives_yield_full_percentages() {
        let stats = aggregate(&[uniform(5), uniform(5)]).unwrap();
        assert_eq!(stats.overall_rating, 5.0);
        assert_eq!(stats.review_count, 2);
        for score in &stats.attributes {
            assert_eq!(score.percentage, 100.0);
        }
    }

    #[test]
    fn test_all_threes_yield_sixty_percent() {
        let stats = aggregate(&[uniform(3)]).unwrap();
        for score in &stats.attributes {
            assert_eq!(score.percentage, 60.0);
        }
    }

    #[test]
    fn test_overall_is_mean_of_per_review_means() {
        // One perfect review, one minimal review: mean(5.0, 3.0) = 4.0
        let stats = aggregate(&[uniform(5), uniform(3)]).unwrap();
        assert_eq!(stats.overall_rating, 4.0);
        for score in &stats.attributes {
            assert_eq!(score.percentage, 80.0);
        }
    }

    #[test]
    fn test_attributes_aggregate_independently() {
        let first = RatingSet {
            punctuality: 5,
            skill_quality: 1,
            politeness: 4,
            pricing: 2,
        };
        let second = RatingSet {
            punctuality: 5,
            skill_quality: 3,
            politeness: 2,
            pricing: 2,
        };
        let stats = aggregate(&[first, second]).unwrap();
        assert_eq!(stats.percentage(RatingAttribute::Punctuality), Some(100.0));
        assert_eq!(stats.percentage(RatingAttribute::SkillQuality), Some(40.0));
        assert_eq!(stats.percentage(RatingAttribute::Politeness), Some(60.0));
        assert_eq!(stats.percentage(RatingAttribute::Pricing), Some(40.0));
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        // mean = (5+5+4)/3 = 4.666..; pct = 93.33.. -> 93.3
        let stats = aggregate(&[uniform(5), uniform(5), uniform(4)]).unwrap();
        assert_eq!(
            stats.percentage(RatingAttribute::Punctuality),
            Some(93.3)
        );
        // overall mean 4.666.. -> 4.7
        assert_eq!(stats.overall_rating, 4.7);
    }

    #[test]
    fn test_attributes_in_canonical_order() {
        let stats = aggregate(&[uniform(4)]).unwrap();
        let order: Vec<RatingAttribute> =
            stats.attributes.iter().map(|s| s.attribute).collect();
        assert_eq!(order, RatingAttribute::ALL.to_vec());
    }

    #[test]
    fn test_top_attribute_first_max_wins() {
        let stats = aggregate(&[uniform(4)]).unwrap();
        // all four tie at 80.0; punctuality is first in canonical order
        assert_eq!(
            stats.top_attribute().unwrap().attribute,
            RatingAttribute::Punctuality
        );
    }

    #[test]
    fn test_round_to_tenth_half_up() {
        // exact binary halves round up, everything else to the nearest tenth
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(79.84), 79.8);
        assert_eq!(round_to_tenth(79.86), 79.9);
    }
}
