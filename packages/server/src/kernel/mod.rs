// Shared service dependencies and capability interfaces

pub mod deps;
pub mod sentiment;

pub use deps::ServerDeps;
pub use sentiment::{LexiconSentiment, Polarity, SentimentClassifier};
