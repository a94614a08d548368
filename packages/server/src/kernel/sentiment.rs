//! Sentiment classification capability.
//!
//! The directory consumes sentiment as an opaque text -> polarity function.
//! Production deployments can plug a pretrained model behind the trait;
//! the shipped implementation is a small lexicon fallback so the rest of
//! the system (tests included) works without any model.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sentiment polarity of a piece of review text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

/// Opaque sentiment classification capability
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Polarity>;
}

/// Lexicon-based fallback classifier
///
/// Counts case-insensitive hits from fixed positive/negative word lists
/// and compares the tallies. Deliberately simple; the trait is the
/// contract, not this implementation.
#[derive(Debug, Default)]
pub struct LexiconSentiment;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "amazing",
    "wonderful",
    "happy",
    "fantastic",
    "awesome",
    "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "sad",
    "angry",
    "disappointed",
    "poor",
];

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SentimentClassifier for LexiconSentiment {
    async fn classify(&self, text: &str) -> Result<Polarity> {
        let lowered = text.to_lowercase();
        let positive_hits = POSITIVE_WORDS
            .iter()
            .filter(|word| lowered.contains(*word))
            .count();
        let negative_hits = NEGATIVE_WORDS
            .iter()
            .filter(|word| lowered.contains(*word))
            .count();

        let polarity = if positive_hits > negative_hits {
            Polarity::Positive
        } else if negative_hits > positive_hits {
            Polarity::Negative
        } else {
            Polarity::Neutral
        };
        Ok(polarity)
    }
}
