//! Insight recomputation from the full review set.

use std::collections::BTreeMap;

use tracing::info;

use crate::common::{DirectoryError, ProviderId, RatingSet};
use crate::domains::insights::models::AiInsight;
use crate::domains::reputation::aggregate::{round_to_tenth, AttributeScore};
use crate::domains::reputation::{aggregate, summarize, tag_themes};
use crate::domains::reviews::models::Review;
use crate::kernel::{Polarity, ServerDeps};

/// Re-derive a provider's cached insight maps from its reviews.
///
/// Praise and concern maps come straight from the reputation summarizer.
/// Emerging mentions count, per theme, the share of reviews whose text
/// mentions it; reviews the sentiment capability classifies as negative
/// are excluded from the mention tally.
pub async fn refresh_provider_insights(
    provider_id: ProviderId,
    deps: &ServerDeps,
) -> Result<AiInsight, DirectoryError> {
    let reviews = Review::find_for_provider(provider_id, &deps.db_pool).await?;

    let rating_sets: Vec<RatingSet> = reviews.iter().map(|r| r.ratings).collect();
    let (top_praise, top_concerns) = match aggregate(&rating_sets) {
        Some(stats) => {
            let summary = summarize(&stats);
            (score_map(&summary.strengths), score_map(&summary.concerns))
        }
        None => (BTreeMap::new(), BTreeMap::new()),
    };

    let mut mention_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for review in &reviews {
        let polarity = deps.sentiment.classify(&review.review_text).await?;
        if polarity == Polarity::Negative {
            continue;
        }
        for theme in tag_themes(&review.review_text) {
            *mention_counts.entry(theme.as_str()).or_insert(0) += 1;
        }
    }

    let emerging_mentions: BTreeMap<String, f64> = mention_counts
        .into_iter()
        .map(|(theme, count)| {
            let share = count as f64 / reviews.len() as f64 * 100.0;
            (theme.to_string(), round_to_tenth(share))
        })
        .collect();

    let insight = AiInsight::upsert(
        provider_id,
        top_praise,
        top_concerns,
        emerging_mentions,
        &deps.db_pool,
    )
    .await?;

    info!(provider_id = %provider_id, "Refreshed provider insights");
    Ok(insight)
}

fn score_map(scores: &[AttributeScore]) -> BTreeMap<String, f64> {
    scores
        .iter()
        .map(|score| (score.attribute.as_str().to_string(), score.percentage))
        .collect()
}
