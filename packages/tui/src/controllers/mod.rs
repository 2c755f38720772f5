//! Controllers that turn user intent into state changes and API calls
pub mod discovery;
pub mod filter;
pub mod pipeline;
pub mod view;

pub use discovery::{FlowOutcome, TrendDiscoveryController};
pub use filter::ResultFilterController;
pub use pipeline::{AnalysisOutcome, AnalysisPipeline, ListingTasks};
pub use view::ViewController;
