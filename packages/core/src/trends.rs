//! Realtime trending keywords and shopping category trends
use crate::utils::{lenient_count, lenient_float};
use serde::Deserialize;

/// Movement of a trending keyword since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeDirection {
    Up,
    Down,
    #[default]
    Flat,
}

impl ChangeDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "🔺",
            ChangeDirection::Down => "🔻",
            ChangeDirection::Flat => "•",
        }
    }
}

impl From<Option<String>> for ChangeDirection {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("+") => ChangeDirection::Up,
            Some("-") => ChangeDirection::Down,
            _ => ChangeDirection::Flat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingKeyword {
    #[serde(default, deserialize_with = "lenient_count")]
    pub rank: u64,
    pub keyword: String,
    #[serde(rename = "change", default, deserialize_with = "change_direction")]
    pub change_direction: ChangeDirection,
}

fn change_direction<'de, D>(deserializer: D) -> Result<ChangeDirection, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.into())
}

/// Highlight applied to a shopping trend's insight tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTone {
    Success,
    Info,
}

/// Marker the service puts in blue-ocean insight tags
const BLUE_OCEAN_MARKER: &str = "블루";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShoppingTrend {
    #[serde(default, deserialize_with = "lenient_count")]
    pub rank: u64,
    pub keyword: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub volume: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub docs: u64,
    #[serde(default, deserialize_with = "lenient_float")]
    pub ratio: f64,
    #[serde(default)]
    pub insight: String,
}

impl ShoppingTrend {
    pub fn insight_tone(&self) -> InsightTone {
        if self.insight.contains(BLUE_OCEAN_MARKER) {
            InsightTone::Success
        } else {
            InsightTone::Info
        }
    }
}

/// A top-level shopping category known to the trends endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingCategory {
    pub id: &'static str,
    pub name: &'static str,
}

impl ShoppingCategory {
    pub const ALL: [ShoppingCategory; 10] = [
        ShoppingCategory { id: "50000000", name: "Fashion clothing" },
        ShoppingCategory { id: "50000001", name: "Fashion accessories" },
        ShoppingCategory { id: "50000002", name: "Beauty" },
        ShoppingCategory { id: "50000003", name: "Digital & appliances" },
        ShoppingCategory { id: "50000004", name: "Furniture & interior" },
        ShoppingCategory { id: "50000005", name: "Baby & kids" },
        ShoppingCategory { id: "50000006", name: "Food" },
        ShoppingCategory { id: "50000007", name: "Sports & leisure" },
        ShoppingCategory { id: "50000008", name: "Living & health" },
        ShoppingCategory { id: "50000009", name: "Hobbies & services" },
    ];

    pub fn find(id: &str) -> Option<ShoppingCategory> {
        Self::ALL.iter().copied().find(|c| c.id == id)
    }

    fn position(id: &str) -> usize {
        Self::ALL.iter().position(|c| c.id == id).unwrap_or(0)
    }

    /// Category after `id` in the catalogue, wrapping around
    pub fn next_after(id: &str) -> ShoppingCategory {
        Self::ALL[(Self::position(id) + 1) % Self::ALL.len()]
    }

    /// Category before `id` in the catalogue, wrapping around
    pub fn previous_before(id: &str) -> ShoppingCategory {
        Self::ALL[(Self::position(id) + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
