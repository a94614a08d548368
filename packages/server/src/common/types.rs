// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::common::errors::DirectoryError;

/// Lowest score a reviewer may assign to an attribute.
pub const MIN_RATING: i16 = 1;

/// Highest score a reviewer may assign to an attribute.
pub const MAX_RATING: i16 = 5;

/// The four fixed rating dimensions of a review.
///
/// The variant order is the canonical iteration order for aggregation
/// and tie-breaking (punctuality first).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RatingAttribute {
    Punctuality,
    SkillQuality,
    Politeness,
    Pricing,
}

impl RatingAttribute {
    /// All attributes in canonical order.
    pub const ALL: [RatingAttribute; 4] = [
        RatingAttribute::Punctuality,
        RatingAttribute::SkillQuality,
        RatingAttribute::Politeness,
        RatingAttribute::Pricing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingAttribute::Punctuality => "punctuality",
            RatingAttribute::SkillQuality => "skill_quality",
            RatingAttribute::Politeness => "politeness",
            RatingAttribute::Pricing => "pricing",
        }
    }
}

impl std::fmt::Display for RatingAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RatingAttribute {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "punctuality" => Ok(RatingAttribute::Punctuality),
            "skill_quality" => Ok(RatingAttribute::SkillQuality),
            "politeness" => Ok(RatingAttribute::Politeness),
            "pricing" => Ok(RatingAttribute::Pricing),
            _ => Err(anyhow::anyhow!("Invalid rating attribute: {}", s)),
        }
    }
}

/// The fixed-size record of per-attribute scores carried by every review.
///
/// Replaces an open attribute mapping at the type level: unknown keys are
/// rejected during deserialization, missing keys fail to deserialize at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(deny_unknown_fields)]
pub struct RatingSet {
    pub punctuality: i16,
    pub skill_quality: i16,
    pub politeness: i16,
    pub pricing: i16,
}

impl RatingSet {
    /// Score for a single attribute.
    pub fn get(&self, attribute: RatingAttribute) -> i16 {
        match attribute {
            RatingAttribute::Punctuality => self.punctuality,
            RatingAttribute::SkillQuality => self.skill_quality,
            RatingAttribute::Politeness => self.politeness,
            RatingAttribute::Pricing => self.pricing,
        }
    }

    /// Reject any score outside the [1, 5] scale.
    ///
    /// The whole set is rejected on the first offending attribute; nothing
    /// is clamped.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        for attribute in RatingAttribute::ALL {
            let value = self.get(attribute);
            if !(MIN_RATING..=MAX_RATING).contains(&value) {
                return Err(DirectoryError::OutOfRangeRating { attribute, value });
            }
        }
        Ok(())
    }

    /// Mean of the four attribute scores for this single review.
    pub fn mean(&self) -> f64 {
        let sum: i16 = RatingAttribute::ALL.iter().map(|a| self.get(*a)).sum();
        f64::from(sum) / RatingAttribute::ALL.len() as f64
    }
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
    fn test_validate_accepts_bounds() {
        assert!(uniform(1).validate().is_ok());
        assert!(uniform(5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_below_minimum() {
        let err = uniform(0).validate().unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::OutOfRangeRating {
                attribute: RatingAttribute::Punctuality,
                value: 0
            }
        ));
    }

    #[test]
    fn test_validate_rejects_above_maximum() {
        assert!(uniform(6).validate().is_err());
    }

    #[test]
    fn test_validate_names_offending_attribute() {
        let set = RatingSet {
            punctuality: 5,
            skill_quality: 5,
            politeness: 9,
            pricing: 5,
        };
        let err = set.validate().unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::OutOfRangeRating {
                attribute: RatingAttribute::Politeness,
                value: 9
            }
        ));
    }

    #[test]
    fn test_mean_of_mixed_scores() {
        let set = RatingSet {
            punctuality: 5,
            skill_quality: 4,
            politeness: 3,
            pricing: 2,
        };
        assert_eq!(set.mean(), 3.5);
    }

    #[test]
    fn test_unknown_keys_rejected_at_boundary() {
        let raw = r#"{"punctuality":5,"skill_quality":5,"politeness":5,"pricing":5,"cleanliness":5}"#;
        assert!(serde_json::from_str::<RatingSet>(raw).is_err());
    }

    #[test]
    fn test_missing_keys_rejected_at_boundary() {
        let raw = r#"{"punctuality":5,"skill_quality":5,"politeness":5}"#;
        assert!(serde_json::from_str::<RatingSet>(raw).is_err());
    }
}
