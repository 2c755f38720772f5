//! Multi-stage keyword analysis:
//! primary analysis -> (result listing, related keywords) -> difficulty score.
//!
//! Every response is checked against the ticket captured when its keyword was submitted.
//! A response whose keyword is no longer current is dropped on arrival.
use crate::api::{AnalyticsApi, ApiError};
use crate::notifications::NotificationQueue;
use crate::state::{AnalysisSession, Panel, RequestTicket, SharedState};
use keyscope_core::{ResultType, SectionPreview};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const ANALYSIS_FAILED: &str = "An error occurred during analysis.";

/// How an `analyze` call ended
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Summary rendered; listings are still loading in the background
    Completed {
        keyword: String,
        listings: ListingTasks,
    },
    /// Blank keyword, nothing was requested
    Skipped,
    /// The service reported an error for this keyword
    Rejected(String),
    /// Transport or decoding failure of the primary request
    Failed(String),
    /// A newer keyword was submitted before this one's response arrived
    Superseded,
}

impl AnalysisOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, AnalysisOutcome::Completed { .. })
    }
}

/// Background fetches started by a completed analysis
#[derive(Debug)]
pub struct ListingTasks {
    pub results: JoinHandle<()>,
    pub related: JoinHandle<()>,
}

impl ListingTasks {
    /// Wait for both listings to settle
    pub async fn join(self) {
        let (results, related) = tokio::join!(self.results, self.related);
        if let Err(e) = results.and(related) {
            warn!(error = %e, "Listing task ended abnormally");
        }
    }
}

#[derive(Clone)]
pub struct AnalysisPipeline {
    state: SharedState,
    api: Arc<dyn AnalyticsApi>,
    notifications: NotificationQueue,
}

impl AnalysisPipeline {
    pub fn new(state: SharedState, api: Arc<dyn AnalyticsApi>, notifications: NotificationQueue) -> Self {
        Self {
            state,
            api,
            notifications,
        }
    }

    /// Analyze a keyword. Callers pass trimmed, non-empty input; blank input is ignored.
    pub async fn analyze(&self, keyword: &str) -> AnalysisOutcome {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return AnalysisOutcome::Skipped;
        }

        let ticket = self.state.write().await.begin_analysis(keyword);
        info!(keyword, epoch = ticket.epoch, "Starting keyword analysis");

        let outcome = self.run(&ticket).await;

        // Runs on every path so the search control never stays disabled
        self.state.write().await.finish_analysis();
        outcome
    }

    async fn run(&self, ticket: &RequestTicket) -> AnalysisOutcome {
        let report = match self.api.analyze(&ticket.keyword).await {
            Ok(report) => report,
            Err(err) => return self.primary_failed(ticket, err).await,
        };

        {
            let mut state = self.state.write().await;
            if !state.is_current(ticket) {
                debug!(keyword = %ticket.keyword, "Dropping superseded analysis response");
                return AnalysisOutcome::Superseded;
            }
            state.onboarding_visible = false;
            state.selections.results = 0;
            state.selections.related = 0;
            state.session = Some(AnalysisSession::new(
                ticket,
                report.summary,
                SectionPreview::from(&report.sections),
            ));
        }

        let result_type = self.state.read().await.view.active_result_type;
        let listings = ListingTasks {
            results: self.load_results(ticket.clone(), result_type).await,
            related: self.load_related(ticket.clone()).await,
        };

        self.load_difficulty(ticket).await;

        {
            let mut state = self.state.write().await;
            if !state.is_current(ticket) {
                debug!(keyword = %ticket.keyword, "Analysis superseded before completion");
                return AnalysisOutcome::Superseded;
            }
            state.reveal_sponsored();
        }
        self.notifications
            .success(format!("'{}' analysis complete", ticket.keyword));
        info!(keyword = %ticket.keyword, "Keyword analysis complete");

        AnalysisOutcome::Completed {
            keyword: ticket.keyword.clone(),
            listings,
        }
    }

    async fn primary_failed(&self, ticket: &RequestTicket, err: ApiError) -> AnalysisOutcome {
        if !self.state.read().await.is_current(ticket) {
            debug!(keyword = %ticket.keyword, error = %err, "Dropping superseded analysis failure");
            return AnalysisOutcome::Superseded;
        }
        match err {
            ApiError::Application(message) => {
                warn!(keyword = %ticket.keyword, %message, "Analysis rejected by service");
                self.notifications.error(message.clone());
                AnalysisOutcome::Rejected(message)
            }
            err => {
                warn!(keyword = %ticket.keyword, error = %err, "Analysis request failed");
                self.notifications.error(ANALYSIS_FAILED);
                AnalysisOutcome::Failed(err.to_string())
            }
        }
    }

    /// Fetch the result listing of `result_type` for the analysis behind `ticket`
    pub async fn load_results(&self, ticket: RequestTicket, result_type: ResultType) -> JoinHandle<()> {
        let listing = {
            let mut state = self.state.write().await;
            let listing = state.begin_listing(ticket, result_type);
            if let Some(session) = state.listing_session_mut(&listing) {
                session.results = Panel::loading("Loading results...");
                state.selections.results = 0;
            }
            listing
        };

        let pipeline = self.clone();
        tokio::spawn(async move {
            let keyword = listing.analysis.keyword.clone();
            let response = pipeline.api.search(&keyword, listing.result_type).await;

            let mut state = pipeline.state.write().await;
            let Some(session) = state.listing_session_mut(&listing) else {
                debug!(%keyword, result_type = %listing.result_type, "Dropping stale result listing");
                return;
            };
            session.results = match response {
                Ok(items) => Panel::from_rows(items, "No results."),
                Err(err) => {
                    warn!(%keyword, error = %err, "Result listing failed");
                    if let ApiError::Application(message) = &err {
                        pipeline.notifications.error(message.clone());
                    }
                    Panel::failed("An error occurred.")
                }
            };
        })
    }

    async fn load_related(&self, ticket: RequestTicket) -> JoinHandle<()> {
        if let Some(session) = self.state.write().await.session_for_mut(&ticket) {
            session.related = Panel::loading("Analyzing related keywords...");
        }

        let pipeline = self.clone();
        tokio::spawn(async move {
            let response = pipeline.api.related(&ticket.keyword).await;

            let mut state = pipeline.state.write().await;
            let Some(session) = state.session_for_mut(&ticket) else {
                debug!(keyword = %ticket.keyword, "Dropping stale related keywords");
                return;
            };
            session.related = match response {
                Ok(keywords) => Panel::from_rows(keywords, "No related keywords."),
                Err(err) => {
                    warn!(keyword = %ticket.keyword, error = %err, "Related keyword fetch failed");
                    if let ApiError::Application(message) = &err {
                        pipeline.notifications.error(message.clone());
                    }
                    Panel::failed("Failed to load related keywords.")
                }
            };
        })
    }

    /// Secondary score; any failure is logged and otherwise ignored
    async fn load_difficulty(&self, ticket: &RequestTicket) {
        match self.api.difficulty(&ticket.keyword).await {
            Ok(result) => {
                let mut state = self.state.write().await;
                match state.session_for_mut(ticket) {
                    Some(session) => session.difficulty = Some(result),
                    None => debug!(keyword = %ticket.keyword, "Dropping stale difficulty score"),
                }
            }
            Err(err) => {
                warn!(keyword = %ticket.keyword, error = %err, "Difficulty fetch failed");
            }
        }
    }
}
