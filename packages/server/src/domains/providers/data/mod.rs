pub mod provider;

pub use provider::{
    AttributeScoreData, InsightData, ProviderData, ProviderDetailResponse, ProviderSummaryData,
    SearchProviderData, SearchResponse, ServicesResponse,
};
