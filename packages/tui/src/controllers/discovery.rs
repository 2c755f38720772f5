//! On-demand discovery flows: realtime trends, shopping-category trends and golden keywords.
//!
//! Each flow owns its own region of the state and catches its own failures.
//! A failing flow leaves an inline `Panel::Failed` behind and never affects another flow.
use super::pipeline::{AnalysisOutcome, AnalysisPipeline};
use super::view::ViewController;
use crate::api::{AnalyticsApi, ApiError};
use crate::notifications::NotificationQueue;
use crate::state::{Panel, SharedState};
use keyscope_core::{sort_by_score, ShoppingCategory, View};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Tagged result of one discovery flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Rendered this many rows
    Rendered(usize),
    /// The service returned no rows
    Empty,
    /// The flow failed; the message is shown inline in its region
    Failed(String),
    /// The flow was not allowed to run
    Skipped,
    /// A newer run of the same flow started before this one's response arrived
    Superseded,
}

#[derive(Clone)]
pub struct TrendDiscoveryController {
    state: SharedState,
    api: Arc<dyn AnalyticsApi>,
    notifications: NotificationQueue,
    pipeline: AnalysisPipeline,
    default_seed: String,
}

impl TrendDiscoveryController {
    pub fn new(
        state: SharedState,
        api: Arc<dyn AnalyticsApi>,
        notifications: NotificationQueue,
        pipeline: AnalysisPipeline,
        default_seed: impl Into<String>,
    ) -> Self {
        Self {
            state,
            api,
            notifications,
            pipeline,
            default_seed: default_seed.into(),
        }
    }

    /// Fetch and show the ranked realtime keywords
    pub async fn load_realtime(&self) -> FlowOutcome {
        {
            let mut state = self.state.write().await;
            state.realtime = Panel::loading("Fetching realtime trends...");
            state.selections.realtime = 0;
        }
        debug!("Loading realtime trends");

        let response = self.api.realtime().await;
        let mut state = self.state.write().await;
        match response {
            Ok(keywords) => {
                let count = keywords.len();
                state.realtime = Panel::from_rows(keywords, "No data.");
                state.reveal_sponsored();
                info!(count, "Realtime trends loaded");
                rendered(count)
            }
            Err(err) => {
                state.realtime = Panel::failed("An error occurred.");
                self.flow_failed("realtime", err)
            }
        }
    }

    /// Allow shopping refreshes from now on
    pub async fn arm_shopping(&self) {
        self.state.write().await.shopping_armed = true;
    }

    /// Fetch trends of the selected shopping category. Skipped until the shopping view armed it.
    pub async fn load_shopping(&self) -> FlowOutcome {
        let category = {
            let mut state = self.state.write().await;
            if !state.shopping_armed {
                debug!("Shopping refresh not armed yet");
                return FlowOutcome::Skipped;
            }
            state.shopping = Panel::loading("Mining shopping trends... (about 10 seconds)");
            state.selections.shopping = 0;
            state.shopping_category.clone()
        };
        debug!(%category, "Loading shopping trends");

        let response = self.api.shopping_trends(&category).await;
        let mut state = self.state.write().await;
        match response {
            Ok(trends) if trends.is_empty() => {
                state.shopping = Panel::Empty("No data.".to_string());
                FlowOutcome::Empty
            }
            Ok(trends) => {
                let count = trends.len();
                state.shopping = Panel::Ready(trends);
                state.reveal_sponsored();
                info!(%category, count, "Shopping trends loaded");
                FlowOutcome::Rendered(count)
            }
            Err(err) => {
                state.shopping = Panel::failed("Failed to load.");
                self.flow_failed("shopping", err)
            }
        }
    }

    /// Step to the neighbouring shopping category. Does not fetch.
    pub async fn cycle_category(&self, forward: bool) -> ShoppingCategory {
        let mut state = self.state.write().await;
        let category = if forward {
            ShoppingCategory::next_after(&state.shopping_category)
        } else {
            ShoppingCategory::previous_before(&state.shopping_category)
        };
        state.shopping_category = category.id.to_string();
        category
    }

    /// Discover golden keywords around the typed keyword (or the default seed), best score first
    pub async fn discover_gold(&self) -> FlowOutcome {
        let (epoch, seed) = {
            let mut state = self.state.write().await;
            state.gold = Panel::loading("Analyzing related search data... (about 15 seconds)");
            state.selections.gold = 0;
            let epoch = state.begin_gold_discovery();
            let seed = state
                .typed_keyword()
                .unwrap_or_else(|| self.default_seed.clone());
            (epoch, seed)
        };
        debug!(%seed, "Discovering golden keywords");

        let response = self.api.discover_gold(&seed).await;
        let mut state = self.state.write().await;
        if !state.finish_gold_discovery(epoch) {
            debug!(%seed, "Dropping superseded golden keyword response");
            return FlowOutcome::Superseded;
        }
        match response {
            Ok(keywords) if keywords.is_empty() => {
                state.gold = Panel::Empty("No data.".to_string());
                FlowOutcome::Empty
            }
            Ok(mut keywords) => {
                sort_by_score(&mut keywords);
                let count = keywords.len();
                state.gold = Panel::Ready(keywords);
                info!(%seed, count, "Golden keywords discovered");
                FlowOutcome::Rendered(count)
            }
            Err(err) => {
                state.gold = Panel::failed(format!("Analysis failed: {err}"));
                self.flow_failed("gold", err)
            }
        }
    }

    /// Analyze a keyword picked from a discovery table and show the dashboard
    pub async fn analyze_row_keyword(
        &self,
        keyword: &str,
        views: &ViewController,
    ) -> JoinHandle<AnalysisOutcome> {
        self.state.write().await.set_keyword_input(keyword);

        let pipeline = self.pipeline.clone();
        let keyword = keyword.to_string();
        let analysis = tokio::spawn(async move { pipeline.analyze(&keyword).await });

        views.activate(View::Dashboard).await;
        analysis
    }

    fn flow_failed(&self, flow: &'static str, err: ApiError) -> FlowOutcome {
        match &err {
            ApiError::Application(message) => {
                warn!(flow, %message, "Discovery flow rejected by service");
                self.notifications.error(message.clone());
            }
            _ => warn!(flow, error = %err, "Discovery flow failed"),
        }
        FlowOutcome::Failed(err.to_string())
    }
}

fn rendered(count: usize) -> FlowOutcome {
    if count == 0 {
        FlowOutcome::Empty
    } else {
        FlowOutcome::Rendered(count)
    }
}
