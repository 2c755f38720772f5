//! Golden keyword candidates: high demand, low content supply
use crate::constants::PLACEHOLDER;
use crate::utils::{lenient_count, lenient_float, lenient_label};
use serde::Deserialize;

/// Competition level as reported by the ad platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionLevel {
    Low,
    Mid,
    High,
}

/// Marker the service puts in trend labels of surging keywords
const SURGING_MARKER: &str = "급상승";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoldenKeyword {
    #[serde(default, deserialize_with = "lenient_label")]
    pub rank: Option<String>,
    pub keyword: String,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(rename = "pc_vol", default, deserialize_with = "lenient_count")]
    pub pc_volume: u64,
    #[serde(rename = "mo_vol", default, deserialize_with = "lenient_count")]
    pub mobile_volume: u64,
    #[serde(rename = "docs", default, deserialize_with = "lenient_count")]
    pub doc_count: u64,
    #[serde(default, deserialize_with = "lenient_float")]
    pub score: f64,
    #[serde(rename = "comp", default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl GoldenKeyword {
    /// Rank as delivered by the service; never recomputed after sorting
    pub fn rank_label(&self) -> &str {
        self.rank.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn trend_label(&self) -> &str {
        self.trend.as_deref().unwrap_or("➡️")
    }

    pub fn is_trending(&self) -> bool {
        self.trend
            .as_deref()
            .map(|t| t.contains(SURGING_MARKER))
            .unwrap_or(false)
    }

    pub fn competition_level(&self) -> CompetitionLevel {
        match self.competition.as_deref() {
            Some("높음") => CompetitionLevel::High,
            Some("중간") => CompetitionLevel::Mid,
            _ => CompetitionLevel::Low,
        }
    }

    pub fn competition_label(&self) -> &str {
        self.competition.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Styling class of the tier badge
    pub fn tier_class(&self) -> &str {
        self.tier.as_deref().unwrap_or("info")
    }

    pub fn tier_label(&self) -> &str {
        self.label.as_deref().unwrap_or("Ordinary")
    }
}

/// Order candidates by descending golden score. Stable, so equal scores keep service order.
pub fn sort_by_score(keywords: &mut [GoldenKeyword]) {
    keywords.sort_by(|a, b| b.score.total_cmp(&a.score));
}
