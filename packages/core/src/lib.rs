// ABOUTME: Core types and classification rules for Keyscope
// ABOUTME: Payload models of the analytics service plus the pure display rules applied to them

pub mod analysis;
pub mod constants;
pub mod error;
pub mod golden;
pub mod theme;
pub mod trends;
pub mod utils;
pub mod view;

// Re-export main types
pub use analysis::{
    AnalysisReport, DifficultyBand, DifficultyResult, RatioBand, RelatedKeyword, ResultItem,
    SectionLists, SectionPreview, Summary,
};
pub use golden::{sort_by_score, CompetitionLevel, GoldenKeyword};
pub use theme::ThemeMode;
pub use trends::{ChangeDirection, InsightTone, ShoppingCategory, ShoppingTrend, TrendingKeyword};
pub use view::{ResultType, View};

// Re-export errors
pub use error::{ParseError, UnknownName};

// Re-export utilities
pub use utils::{format_count, format_ratio};
