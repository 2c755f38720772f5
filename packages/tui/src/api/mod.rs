//! Access to the external keyword analytics service
pub mod client;
pub mod error;

pub use client::HttpAnalyticsApi;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;
use keyscope_core::{
    AnalysisReport, DifficultyResult, GoldenKeyword, RelatedKeyword, ResultItem, ResultType,
    ShoppingTrend, TrendingKeyword,
};

/// Fixed base path of every analytics endpoint
pub const API_BASE_PATH: &str = "/api";

/// Read-only operations of the analytics service. Every call is an independent GET.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Check that the service is reachable
    async fn health(&self) -> ApiResult<bool>;

    /// Volume summary and section order for a keyword
    async fn analyze(&self, keyword: &str) -> ApiResult<AnalysisReport>;

    /// Ranking difficulty for a keyword
    async fn difficulty(&self, keyword: &str) -> ApiResult<DifficultyResult>;

    /// Related keywords with their volumes
    async fn related(&self, keyword: &str) -> ApiResult<Vec<RelatedKeyword>>;

    /// Result listing of one category
    async fn search(&self, keyword: &str, result_type: ResultType) -> ApiResult<Vec<ResultItem>>;

    /// Ranked realtime trending keywords
    async fn realtime(&self) -> ApiResult<Vec<TrendingKeyword>>;

    /// Trending keywords of a shopping category
    async fn shopping_trends(&self, category_id: &str) -> ApiResult<Vec<ShoppingTrend>>;

    /// Golden keyword candidates around a seed keyword
    async fn discover_gold(&self, seed: &str) -> ApiResult<Vec<GoldenKeyword>>;
}
