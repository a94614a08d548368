//! Reviews domain - structured provider reviews, append-only

pub mod activities;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::{SubmitReviewInput, SubmitReviewResponse};
pub use models::{CreateReview, Review};
