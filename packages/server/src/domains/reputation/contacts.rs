//! Contact-weighted review highlighting.
//!
//! Surfaces the reviews written by people the caller actually knows, with
//! reviewer identity redacted to a short fragment. The redaction is
//! deterministic and casual-viewing-safe, not cryptographic anonymization.

use std::collections::HashSet;

use serde::Serialize;

use crate::common::RatingSet;
use crate::domains::reviews::models::Review;

/// Number of trailing characters kept when masking a reviewer phone.
const MASK_FRAGMENT_LEN: usize = 4;

/// A review authored by one of the caller's contacts, identity redacted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactReview {
    /// Last 4 characters of the reviewer's phone number.
    pub masked_identity: String,
    pub text: String,
    pub ratings: RatingSet,
}

/// Redact a phone number to its trailing fragment.
///
/// Numbers shorter than the fragment are returned whole.
pub fn mask_phone_fragment(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let start = chars.len().saturating_sub(MASK_FRAGMENT_LEN);
    chars[start..].iter().collect()
}

/// Filter reviews down to those authored by the caller's contacts.
///
/// Preserves the input order and returns the full matching set; any
/// caller-visible cap (search results show at most 2) belongs to the
/// presentation layer. An empty contact list short-circuits without
/// scanning the reviews.
pub fn match_contact_reviews(
    reviews: &[Review],
    contact_numbers: &HashSet<String>,
) -> Vec<ContactReview> {
    if contact_numbers.is_empty() {
        return Vec::new();
    }

    reviews
        .iter()
        .filter(|review| contact_numbers.contains(&review.reviewer_phone))
        .map(|review| ContactReview {
            masked_identity: mask_phone_fragment(&review.reviewer_phone),
            text: review.review_text.clone(),
            ratings: review.ratings,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ProviderId, ReviewId};
    use chrono::Utc;

    fn review(phone: &str, text: &str) -> Review {
        Review {
            id: ReviewId::new(),
            provider_id: ProviderId::nil(),
            reviewer_phone: phone.to_string(),
            ratings: RatingSet {
                punctuality: 4,
                skill_quality: 4,
                politeness: 4,
                pricing: 4,
            },
            review_text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    fn contacts(numbers: &[&str]) -> HashSet<String> {
        numbers.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_contacts_short_circuits() {
        let reviews = vec![review("+919876543210", "great work")];
        assert!(match_contact_reviews(&reviews, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_matches_only_contact_phones() {
        let reviews = vec![
            review("+919876543210", "from a contact"),
            review("+919999999999", "from a stranger"),
        ];
        let matched = match_contact_reviews(&reviews, &contacts(&["+919876543210"]));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].text, "from a contact");
    }

    #[test]
    fn test_preserves_input_order() {
        let reviews = vec![
            review("+911111111111", "first"),
            review("+912222222222", "second"),
            review("+911111111111", "third"),
        ];
        let matched = match_contact_reviews(
            &reviews,
            &contacts(&["+911111111111", "+912222222222"]),
        );
        let texts: Vec<&str> = matched.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_identity_masked_to_last_four() {
        let reviews = vec![review("+919876543210", "hi")];
        let matched = match_contact_reviews(&reviews, &contacts(&["+919876543210"]));
        assert_eq!(matched[0].masked_identity, "3210");
    }

    #[test]
    fn test_mask_short_number_returned_whole() {
        assert_eq!(mask_phone_fragment("123"), "123");
        assert_eq!(mask_phone_fragment(""), "");
    }

    #[test]
    fn test_membership_is_exact_string_match() {
        // No normalization: "919876543210" does not match "+919876543210"
        let reviews = vec![review("+919876543210", "hi")];
        assert!(match_contact_reviews(&reviews, &contacts(&["919876543210"])).is_empty());
    }
}
