use super::{AnalyticsApi, ApiError, ApiResult, API_BASE_PATH};
use async_trait::async_trait;
use keyscope_config::DashboardConfig;
use keyscope_core::{
    AnalysisReport, DifficultyResult, GoldenKeyword, RelatedKeyword, ResultItem, ResultType,
    ShoppingTrend, TrendingKeyword,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// HTTP client for the keyword analytics service
#[derive(Clone)]
pub struct HttpAnalyticsApi {
    client: Client,
    base_url: String,
}

impl HttpAnalyticsApi {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Build a client honouring the configured network timeouts
    pub fn from_config(config: &DashboardConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, API_BASE_PATH, path)
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// An object carrying an `error` field is an application error whatever the HTTP
    /// status, since the service answers validation failures with `400 {"error": ...}`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.endpoint(path);
        debug!(%url, ?query, "Sending analytics request");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                ApiError::invalid_response(e.to_string())
            } else {
                ApiError::invalid_response(format!("HTTP {}: {}", status, e))
            }
        })?;

        if let Some(message) = application_error(&value) {
            return Err(ApiError::Application(message));
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn application_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl AnalyticsApi for HttpAnalyticsApi {
    async fn health(&self) -> ApiResult<bool> {
        let response = self.client.get(self.endpoint("health")).send().await?;
        Ok(response.status().is_success())
    }

    async fn analyze(&self, keyword: &str) -> ApiResult<AnalysisReport> {
        self.get_json("analyze", &[("q", keyword)]).await
    }

    async fn difficulty(&self, keyword: &str) -> ApiResult<DifficultyResult> {
        self.get_json("difficulty", &[("q", keyword)]).await
    }

    async fn related(&self, keyword: &str) -> ApiResult<Vec<RelatedKeyword>> {
        self.get_json("related", &[("q", keyword)]).await
    }

    async fn search(&self, keyword: &str, result_type: ResultType) -> ApiResult<Vec<ResultItem>> {
        self.get_json("search", &[("q", keyword), ("type", result_type.as_query())])
            .await
    }

    async fn realtime(&self) -> ApiResult<Vec<TrendingKeyword>> {
        self.get_json("realtime", &[]).await
    }

    async fn shopping_trends(&self, category_id: &str) -> ApiResult<Vec<ShoppingTrend>> {
        self.get_json("trends/shopping", &[("cid", category_id)]).await
    }

    async fn discover_gold(&self, seed: &str) -> ApiResult<Vec<GoldenKeyword>> {
        self.get_json("gold/discover", &[("q", seed)]).await
    }
}
