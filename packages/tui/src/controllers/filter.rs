use super::pipeline::AnalysisPipeline;
use crate::state::SharedState;
use keyscope_core::ResultType;
use tokio::task::JoinHandle;
use tracing::debug;

/// Switches the dashboard's result category
#[derive(Clone)]
pub struct ResultFilterController {
    state: SharedState,
    pipeline: AnalysisPipeline,
}

impl ResultFilterController {
    pub fn new(state: SharedState, pipeline: AnalysisPipeline) -> Self {
        Self { state, pipeline }
    }

    /// Make `result_type` active and refetch the listing of the keyword on screen.
    /// Returns `None` when no analysis has rendered yet; nothing is fetched then.
    ///
    /// The listing follows the displayed session rather than the latest submission, so a
    /// rejected or still pending analysis never leaves the list on the previous type.
    pub async fn select_result_type(&self, result_type: ResultType) -> Option<JoinHandle<()>> {
        let ticket = {
            let mut state = self.state.write().await;
            state.view.active_result_type = result_type;
            state.shown_ticket()
        };

        let Some(ticket) = ticket else {
            debug!(%result_type, "No analysis on screen, skipping result refetch");
            return None;
        };
        debug!(keyword = %ticket.keyword, %result_type, "Refetching result listing");
        Some(self.pipeline.load_results(ticket, result_type).await)
    }

    /// Step to the next (or previous) category in display order
    pub async fn cycle(&self, forward: bool) -> Option<JoinHandle<()>> {
        let current = self.state.read().await.view.active_result_type;
        let next = if forward { current.next() } else { current.previous() };
        self.select_result_type(next).await
    }
}
