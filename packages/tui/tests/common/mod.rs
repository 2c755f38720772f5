// ABOUTME: Scripted analytics service and controller wiring for integration tests
// ABOUTME: Responses are keyed by keyword and may be delayed; run tests with paused tokio time
#![allow(dead_code)]

use async_trait::async_trait;
use keyscope_core::{
    AnalysisReport, DifficultyResult, GoldenKeyword, RelatedKeyword, ResultItem, ResultType,
    SectionLists, ShoppingTrend, Summary, TrendingKeyword,
};
use keyscope_tui::api::{AnalyticsApi, ApiError, ApiResult};
use keyscope_tui::controllers::{
    AnalysisPipeline, ResultFilterController, TrendDiscoveryController, ViewController,
};
use keyscope_tui::notifications::{NotificationQueue, Severity};
use keyscope_tui::state::{AppState, SharedState};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_SEED: &str = "인기아이템";

type Script<T> = Mutex<HashMap<String, (Duration, ApiResult<T>)>>;

/// Fake analytics service. Unscripted calls succeed immediately with a neutral payload.
#[derive(Default)]
pub struct ScriptedApi {
    analyze: Script<AnalysisReport>,
    difficulty: Script<DifficultyResult>,
    related: Script<Vec<RelatedKeyword>>,
    search: Script<Vec<ResultItem>>,
    realtime: Script<Vec<TrendingKeyword>>,
    shopping: Script<Vec<ShoppingTrend>>,
    gold: Script<Vec<GoldenKeyword>>,
    calls: Mutex<Vec<String>>,
}

fn script<T>(map: &Script<T>, key: &str, delay: Duration, response: ApiResult<T>) {
    map.lock().unwrap().insert(key.to_string(), (delay, response));
}

async fn reply<T: Clone>(map: &Script<T>, key: &str, fallback: impl FnOnce() -> T) -> ApiResult<T> {
    let scripted = map.lock().unwrap().get(key).cloned();
    match scripted {
        Some((delay, response)) => {
            tokio::time::sleep(delay).await;
            response
        }
        None => Ok(fallback()),
    }
}

fn search_key(keyword: &str, result_type: ResultType) -> String {
    format!("{keyword}|{result_type}")
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_analyze(&self, keyword: &str, delay_ms: u64, response: ApiResult<AnalysisReport>) {
        script(&self.analyze, keyword, Duration::from_millis(delay_ms), response);
    }

    pub fn script_difficulty(&self, keyword: &str, delay_ms: u64, response: ApiResult<DifficultyResult>) {
        script(&self.difficulty, keyword, Duration::from_millis(delay_ms), response);
    }

    pub fn script_related(&self, keyword: &str, delay_ms: u64, response: ApiResult<Vec<RelatedKeyword>>) {
        script(&self.related, keyword, Duration::from_millis(delay_ms), response);
    }

    pub fn script_search(
        &self,
        keyword: &str,
        result_type: ResultType,
        delay_ms: u64,
        response: ApiResult<Vec<ResultItem>>,
    ) {
        script(
            &self.search,
            &search_key(keyword, result_type),
            Duration::from_millis(delay_ms),
            response,
        );
    }

    pub fn script_realtime(&self, delay_ms: u64, response: ApiResult<Vec<TrendingKeyword>>) {
        script(&self.realtime, "", Duration::from_millis(delay_ms), response);
    }

    pub fn script_shopping(&self, category: &str, delay_ms: u64, response: ApiResult<Vec<ShoppingTrend>>) {
        script(&self.shopping, category, Duration::from_millis(delay_ms), response);
    }

    pub fn script_gold(&self, seed: &str, delay_ms: u64, response: ApiResult<Vec<GoldenKeyword>>) {
        script(&self.gold, seed, Duration::from_millis(delay_ms), response);
    }

    /// Every request received so far, as `endpoint:argument`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        let prefix = format!("{endpoint}:");
        self.calls().iter().filter(|c| c.starts_with(&prefix)).count()
    }

    fn record(&self, endpoint: &str, argument: &str) {
        self.calls.lock().unwrap().push(format!("{endpoint}:{argument}"));
    }
}

#[async_trait]
impl AnalyticsApi for ScriptedApi {
    async fn health(&self) -> ApiResult<bool> {
        self.record("health", "");
        Ok(true)
    }

    async fn analyze(&self, keyword: &str) -> ApiResult<AnalysisReport> {
        self.record("analyze", keyword);
        reply(&self.analyze, keyword, || report(keyword, 1_000)).await
    }

    async fn difficulty(&self, keyword: &str) -> ApiResult<DifficultyResult> {
        self.record("difficulty", keyword);
        reply(&self.difficulty, keyword, || DifficultyResult {
            score: 42,
            label: "Medium".to_string(),
        })
        .await
    }

    async fn related(&self, keyword: &str) -> ApiResult<Vec<RelatedKeyword>> {
        self.record("related", keyword);
        reply(&self.related, keyword, Vec::new).await
    }

    async fn search(&self, keyword: &str, result_type: ResultType) -> ApiResult<Vec<ResultItem>> {
        let key = search_key(keyword, result_type);
        self.record("search", &key);
        reply(&self.search, &key, Vec::new).await
    }

    async fn realtime(&self) -> ApiResult<Vec<TrendingKeyword>> {
        self.record("realtime", "");
        reply(&self.realtime, "", Vec::new).await
    }

    async fn shopping_trends(&self, category_id: &str) -> ApiResult<Vec<ShoppingTrend>> {
        self.record("shopping", category_id);
        reply(&self.shopping, category_id, Vec::new).await
    }

    async fn discover_gold(&self, seed: &str) -> ApiResult<Vec<GoldenKeyword>> {
        self.record("gold", seed);
        reply(&self.gold, seed, Vec::new).await
    }
}

/// Controllers wired the way the application wires them
pub struct Harness {
    pub api: Arc<ScriptedApi>,
    pub state: SharedState,
    pub notifications: NotificationQueue,
    pub pipeline: AnalysisPipeline,
    pub filter: ResultFilterController,
    pub views: ViewController,
}

impl Harness {
    pub fn new(api: Arc<ScriptedApi>) -> Self {
        let state = AppState::new("50000000").into_shared();
        let notifications = NotificationQueue::new();
        let pipeline = AnalysisPipeline::new(state.clone(), api.clone(), notifications.clone());
        let filter = ResultFilterController::new(state.clone(), pipeline.clone());
        let discovery = TrendDiscoveryController::new(
            state.clone(),
            api.clone(),
            notifications.clone(),
            pipeline.clone(),
            DEFAULT_SEED,
        );
        let views = ViewController::new(state.clone(), discovery);
        Self {
            api,
            state,
            notifications,
            pipeline,
            filter,
            views,
        }
    }

    pub fn discovery(&self) -> &TrendDiscoveryController {
        self.views.discovery()
    }

    /// Messages currently visible, oldest first
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.notifications
            .snapshot()
            .into_iter()
            .map(|n| (n.severity, n.message))
            .collect()
    }
}

pub fn report(keyword: &str, total_volume: u64) -> AnalysisReport {
    AnalysisReport {
        keyword: Some(keyword.to_string()),
        summary: Summary {
            pc: total_volume / 4,
            mobile: total_volume - total_volume / 4,
            total_volume,
            doc_count: total_volume / 10,
            ratio: 0.1,
        },
        sections: SectionLists {
            pc: vec!["blog".to_string(), "shopping".to_string()],
            mobile: vec![],
        },
    }
}

pub fn document(title: &str) -> ResultItem {
    ResultItem::Document {
        title: title.to_string(),
        description: String::new(),
        source: None,
        date: None,
        link: format!("https://example.com/{title}"),
    }
}

pub fn related(keyword: &str) -> RelatedKeyword {
    RelatedKeyword {
        keyword: keyword.to_string(),
        total_volume: 100,
        doc_count: 10,
        ratio: 0.1,
    }
}

pub fn trending(rank: u64, keyword: &str) -> TrendingKeyword {
    TrendingKeyword {
        rank,
        keyword: keyword.to_string(),
        change_direction: Default::default(),
    }
}

pub fn golden(keyword: &str, score: f64) -> GoldenKeyword {
    GoldenKeyword {
        rank: None,
        keyword: keyword.to_string(),
        trend: None,
        pc_volume: 0,
        mobile_volume: 0,
        doc_count: 0,
        score,
        competition: None,
        tier: None,
        label: None,
    }
}

pub fn shopping_trend(rank: u64, keyword: &str) -> ShoppingTrend {
    ShoppingTrend {
        rank,
        keyword: keyword.to_string(),
        volume: 1_000,
        docs: 50,
        ratio: 0.05,
        insight: "블루오션".to_string(),
    }
}

pub fn network_error() -> ApiError {
    ApiError::network("connection reset")
}
