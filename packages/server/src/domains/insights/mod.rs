//! Insights domain - cached per-provider reputation insight maps
//!
//! Insight rows are a derived cache over the review set, re-derivable at
//! any time; the reviews stay the source of truth.

pub mod activities;
pub mod models;

pub use activities::refresh_provider_insights;
pub use models::AiInsight;
