//! Keyscope TUI - terminal dashboard for keyword analytics
//!
//! This library holds the orchestration core of the dashboard: the shared state,
//! the controllers that sequence requests against the analytics service, the
//! notification queue and theme preference, and the ratatui renderer.

pub mod api;
pub mod app;
pub mod controllers;
pub mod events;
pub mod notifications;
pub mod preferences;
pub mod state;
pub mod ui;

pub use api::{AnalyticsApi, ApiError, HttpAnalyticsApi};
pub use app::App;
pub use controllers::{
    AnalysisOutcome, AnalysisPipeline, FlowOutcome, ResultFilterController,
    TrendDiscoveryController, ViewController,
};
pub use notifications::{Notification, NotificationQueue, Severity};
pub use preferences::{FilePreferenceBackend, MemoryPreferenceBackend, PreferenceBackend, PreferenceStore};
pub use state::{AppState, SharedState};
