pub mod review;

pub use review::{ContactReviewData, RecentReviewData, SubmitReviewInput, SubmitReviewResponse};
