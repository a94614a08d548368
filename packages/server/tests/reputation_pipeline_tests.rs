//! End-to-end tests for the reputation pipeline's pure stages.
//!
//! These exercise the same composition the read paths perform - aggregate,
//! summarize, contact-match, rank, tag - over in-memory models, with no
//! database involved.

use std::collections::HashSet;

use chrono::Utc;
use server_core::common::{ProviderId, RatingAttribute, RatingSet, ReviewId};
use server_core::domains::providers::models::Provider;
use server_core::domains::reputation::{
    aggregate, match_contact_reviews, rank_providers, summarize, tag_themes, Theme,
};
use server_core::domains::reviews::models::Review;

fn review(provider_id: ProviderId, phone: &str, score: i16, text: &str) -> Review {
    Review {
        id: ReviewId::new(),
        provider_id,
        reviewer_phone: phone.to_string(),
        ratings: RatingSet {
            punctuality: score,
            skill_quality: score,
            politeness: score,
            pricing: score,
        },
        review_text: text.to_string(),
        created_at: Utc::now(),
    }
}

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

#[test]
fn two_review_provider_lands_on_the_strength_boundary() {
    let provider_id = ProviderId::new();
    let reviews = vec![
        review(provider_id, "+911111111111", 5, "excellent"),
        review(provider_id, "+912222222222", 3, "okay"),
    ];

    let rating_sets: Vec<RatingSet> = reviews.iter().map(|r| r.ratings).collect();
    let stats = aggregate(&rating_sets).expect("two reviews must aggregate");

    // mean(5.0, 3.0) = 4.0, every attribute at exactly 80.0
    assert_eq!(stats.overall_rating, 4.0);
    for score in &stats.attributes {
        assert_eq!(score.percentage, 80.0);
    }

    // 80.0 is inclusive: all four are strengths, none is a concern
    let summary = summarize(&stats);
    assert_eq!(summary.strengths.len(), 4);
    assert!(summary.concerns.is_empty());

    let top = summary.top_strength().expect("four strengths present");
    assert_eq!(top.attribute, RatingAttribute::Punctuality);
    assert_eq!(top.percentage, 80.0);
    assert!(summary.main_concern().is_none());
}

#[test]
fn zero_review_provider_is_a_distinct_empty_state() {
    assert!(aggregate(&[]).is_none());

    // downstream stages handle the empty state without panicking
    let summary = server_core::domains::reputation::ReputationSummary::empty();
    assert!(summary.strengths.is_empty());
    assert!(summary.concerns.is_empty());
    assert!(summary.top_strength().is_none());
    assert!(summary.main_concern().is_none());
}

#[test]
fn contact_overlay_composes_with_aggregation() {
    let provider_id = ProviderId::new();
    let reviews = vec![
        review(provider_id, "+919876543210", 5, "Came on time, great work"),
        review(provider_id, "+919999999999", 1, "terrible"),
        review(provider_id, "+919876543210", 4, "polite as always"),
    ];

    let contacts: HashSet<String> = ["+919876543210".to_string()].into_iter().collect();
    let matched = match_contact_reviews(&reviews, &contacts);

    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].masked_identity, "3210");
    assert_eq!(matched[0].text, "Came on time, great work");
    assert_eq!(matched[1].text, "polite as always");

    // the aggregate still covers every review, contacts or not
    let rating_sets: Vec<RatingSet> = reviews.iter().map(|r| r.ratings).collect();
    assert_eq!(aggregate(&rating_sets).unwrap().review_count, 3);
}

#[test]
fn ranking_is_stable_and_reports_pretruncation_total() {
    let ranked = rank_providers(vec![
        provider("B", 4.0, 10),
        provider("A", 4.0, 2),
        provider("top", 4.9, 7),
        provider("unrated", 0.0, 0),
        provider("mid", 4.4, 3),
    ]);

    assert_eq!(ranked.total_found, 5);
    let names: Vec<&str> = ranked.providers.iter().map(|p| p.name.as_str()).collect();
    // top three only; B and A keep their input order at 4.0
    assert_eq!(names, vec!["top", "mid", "B"]);
}

#[test]
fn themes_complement_the_numeric_attributes() {
    let text = "Came on time, very polite and reasonable price";
    assert_eq!(
        tag_themes(text),
        vec![Theme::Punctual, Theme::Polite, Theme::Price]
    );

    // tagging is derived from text alone and repeatable
    assert_eq!(tag_themes(text), tag_themes(text));
}
