//! Provider ordering for search results.

use serde::Serialize;
use std::cmp::Ordering;

use crate::domains::providers::models::Provider;

/// Search results display at most this many providers.
pub const SEARCH_RESULT_LIMIT: usize = 3;

/// Ranked search candidates, truncated for display.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProviders {
    /// Top providers, at most [`SEARCH_RESULT_LIMIT`].
    pub providers: Vec<Provider>,
    /// Candidate count before truncation.
    pub total_found: usize,
}

/// Order candidate providers by aggregate rating and truncate for display.
///
/// Input is expected pre-filtered by normalized service type and location.
/// Sort is descending by `avg_rating` and stable: providers with equal
/// ratings keep the store's relative order. Providers with zero reviews
/// have no meaningful `avg_rating` and sort after all rated providers,
/// again in original relative order.
pub fn rank_providers(mut providers: Vec<Provider>) -> RankedProviders {
    let total_found = providers.len();

    providers.sort_by(|a, b| match (a.has_reviews(), b.has_reviews()) {
        (true, true) => b.avg_rating.total_cmp(&a.avg_rating),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    });
    providers.truncate(SEARCH_RESULT_LIMIT);

    RankedProviders {
        providers,
        total_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ProviderId;
    use chrono::Utc;

    fn provider(name: &str, avg_rating: f64, total_reviews: i32) -> Provider {
        Provider {
            id: ProviderId::new(),
            name: name.to_string(),
            service_type: "electrician".to_string(),
            location: "mumbai".to_string(),
            phone_number: None,
            avg_rating,
            total_reviews,
            created_at: Utc::now(),
        }
    }

    fn names(ranked: &RankedProviders) -> Vec<&str> {
        ranked.providers.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_orders_descending_by_rating() {
        let ranked = rank_providers(vec![
            provider("low", 3.2, 5),
            provider("high", 4.8, 5),
            provider("mid", 4.1, 5),
        ]);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_stable_for_equal_ratings() {
        let ranked = rank_providers(vec![provider("B", 4.0, 3), provider("A", 4.0, 9)]);
        assert_eq!(names(&ranked), vec!["B", "A"]);
    }

    #[test]
    fn test_truncates_to_limit_and_reports_total() {
        let ranked = rank_providers(vec![
            provider("a", 4.9, 1),
            provider("b", 4.7, 1),
            provider("c", 4.5, 1),
            provider("d", 4.3, 1),
            provider("e", 4.1, 1),
        ]);
        assert_eq!(ranked.providers.len(), SEARCH_RESULT_LIMIT);
        assert_eq!(ranked.total_found, 5);
        assert_eq!(names(&ranked), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unrated_providers_sort_last() {
        let ranked = rank_providers(vec![
            provider("new-1", 0.0, 0),
            provider("rated", 2.1, 4),
            provider("new-2", 0.0, 0),
        ]);
        assert_eq!(names(&ranked), vec!["rated", "new-1", "new-2"]);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let ranked = rank_providers(Vec::new());
        assert!(ranked.providers.is_empty());
        assert_eq!(ranked.total_found, 0);
    }
}
