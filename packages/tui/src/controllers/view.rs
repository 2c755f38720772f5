use super::discovery::{FlowOutcome, TrendDiscoveryController};
use crate::state::{FocusArea, SharedState};
use keyscope_core::{ParseError, View};
use tokio::task::JoinHandle;
use tracing::debug;

/// Router between the dashboard views. Exactly one view is active at a time.
#[derive(Clone)]
pub struct ViewController {
    state: SharedState,
    discovery: TrendDiscoveryController,
}

impl ViewController {
    pub fn new(state: SharedState, discovery: TrendDiscoveryController) -> Self {
        Self { state, discovery }
    }

    pub fn discovery(&self) -> &TrendDiscoveryController {
        &self.discovery
    }

    /// Show `view` and start its default load, if it has one.
    ///
    /// Re-activating the visible view repeats its load.
    pub async fn activate(&self, view: View) -> Option<JoinHandle<FlowOutcome>> {
        {
            let mut state = self.state.write().await;
            if state.view.active_view != view {
                state.focus = FocusArea::Input;
            }
            state.view.active_view = view;
        }
        debug!(view = %view, "View activated");

        match view {
            View::Dashboard => None,
            View::Realtime => {
                let discovery = self.discovery.clone();
                Some(tokio::spawn(async move { discovery.load_realtime().await }))
            }
            View::Shopping => {
                self.discovery.arm_shopping().await;
                None
            }
            View::Gold => {
                let discovery = self.discovery.clone();
                Some(tokio::spawn(async move { discovery.discover_gold().await }))
            }
        }
    }

    /// Activate a view by its name; unknown names are rejected without touching the state
    pub async fn activate_by_name(&self, name: &str) -> Result<Option<JoinHandle<FlowOutcome>>, ParseError> {
        let view: View = name.parse()?;
        Ok(self.activate(view).await)
    }

    pub async fn active_view(&self) -> View {
        self.state.read().await.view.active_view
    }

    /// Cycle through the views in navigation order
    pub async fn cycle(&self, forward: bool) -> Option<JoinHandle<FlowOutcome>> {
        let current = self.active_view().await;
        let next = if forward { current.next() } else { current.previous() };
        self.activate(next).await
    }
}
