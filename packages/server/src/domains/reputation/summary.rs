//! Strengths/concerns classification over aggregated attribute percentages.

use serde::Serialize;

use crate::domains::reputation::aggregate::{AggregateStats, AttributeScore};

/// Attributes at or above this percentage are strengths.
pub const STRENGTH_THRESHOLD: f64 = 80.0;

/// Attributes at or below this percentage are concerns.
pub const CONCERN_THRESHOLD: f64 = 60.0;

/// Ranked strengths/concerns view of a provider's aggregate stats.
///
/// Attributes in the open interval (60, 80) are neutral and appear in
/// neither list; the gap is intentional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReputationSummary {
    /// Strengths, ranked descending by percentage (stable over canonical
    /// attribute order for ties).
    pub strengths: Vec<AttributeScore>,
    /// Concerns, ranked descending by percentage.
    pub concerns: Vec<AttributeScore>,
}

impl ReputationSummary {
    /// Summary for a provider with no reviews.
    pub fn empty() -> Self {
        Self {
            strengths: Vec::new(),
            concerns: Vec::new(),
        }
    }

    /// The strength with the maximum percentage, ties broken by canonical
    /// attribute order. `None` when there are no strengths.
    pub fn top_strength(&self) -> Option<&AttributeScore> {
        self.strengths.first()
    }

    /// The concern with the maximum percentage among concerns - the
    /// mildest one. `None` when there are no concerns.
    pub fn main_concern(&self) -> Option<&AttributeScore> {
        self.concerns.first()
    }
}

/// Classify aggregated attribute percentages into strengths and concerns.
///
/// `>= 80` is a strength, `<= 60` a concern; both boundaries inclusive.
pub fn summarize(stats: &AggregateStats) -> ReputationSummary {
    let mut strengths: Vec<AttributeScore> = Vec::new();
    let mut concerns: Vec<AttributeScore> = Vec::new();

    for score in &stats.attributes {
        if score.percentage >= STRENGTH_THRESHOLD {
            strengths.push(*score);
        } else if score.percentage <= CONCERN_THRESHOLD {
            concerns.push(*score);
        }
    }

    // Stable sorts: equal percentages keep canonical attribute order,
    // which makes first() the documented tie-break
    strengths.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    concerns.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    ReputationSummary { strengths, concerns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RatingAttribute;

    fn stats(percentages: [f64; 4]) -> AggregateStats {
        AggregateStats {
            overall_rating: 4.0,
            review_count: 1,
            attributes: RatingAttribute::ALL
                .into_iter()
                .zip(percentages)
                .map(|(attribute, percentage)| AttributeScore {
                    attribute,
                    percentage,
                })
                .collect(),
        }
    }

    #[test]
    fn test_eighty_is_a_strength() {
        let summary = summarize(&stats([80.0, 80.0, 80.0, 80.0]));
        assert_eq!(summary.strengths.len(), 4);
        assert!(summary.concerns.is_empty());
    }

    #[test]
    fn test_just_below_eighty_is_not_a_strength() {
        let summary = summarize(&stats([79.9, 70.0, 70.0, 70.0]));
        assert!(summary.strengths.is_empty());
    }

    #[test]
    fn test_sixty_is_a_concern() {
        let summary = summarize(&stats([60.0, 60.0, 60.0, 60.0]));
        assert_eq!(summary.concerns.len(), 4);
        assert!(summary.strengths.is_empty());
    }

    #[test]
    fn test_neutral_gap_omitted_from_both() {
        let summary = summarize(&stats([79.9, 60.1, 70.0, 75.0]));
        assert!(summary.strengths.is_empty());
        assert!(summary.concerns.is_empty());
        assert!(summary.top_strength().is_none());
        assert!(summary.main_concern().is_none());
    }

    #[test]
    fn test_top_strength_is_maximum() {
        let summary = summarize(&stats([85.0, 95.0, 90.0, 50.0]));
        let top = summary.top_strength().unwrap();
        assert_eq!(top.attribute, RatingAttribute::SkillQuality);
        assert_eq!(top.percentage, 95.0);
    }

    #[test]
    fn test_top_strength_tie_breaks_on_canonical_order() {
        let summary = summarize(&stats([80.0, 80.0, 80.0, 80.0]));
        assert_eq!(
            summary.top_strength().unwrap().attribute,
            RatingAttribute::Punctuality
        );
    }

    #[test]
    fn test_main_concern_is_mildest_concern() {
        // Inherited behavior: the concern with the highest percentage wins
        let summary = summarize(&stats([90.0, 40.0, 55.0, 20.0]));
        let main = summary.main_concern().unwrap();
        assert_eq!(main.attribute, RatingAttribute::Politeness);
        assert_eq!(main.percentage, 55.0);
    }

    #[test]
    fn test_strengths_ranked_descending() {
        let summary = summarize(&stats([85.0, 95.0, 80.0, 90.0]));
        let ranked: Vec<f64> = summary.strengths.iter().map(|s| s.percentage).collect();
        assert_eq!(ranked, vec![95.0, 90.0, 85.0, 80.0]);
    }

    #[test]
    fn test_empty_summary_has_no_top_values() {
        let summary = ReputationSummary::empty();
        assert!(summary.top_strength().is_none());
        assert!(summary.main_concern().is_none());
    }
}
