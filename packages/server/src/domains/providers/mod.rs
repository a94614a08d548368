//! Providers domain - the service provider directory

pub mod activities;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::{ProviderData, ProviderDetailResponse, SearchResponse, ServicesResponse};
pub use models::{CreateProvider, Provider};
