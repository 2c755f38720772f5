//! Named views and result-listing categories
use crate::error::{ParseError, UnknownName};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// Top-level views of the dashboard. Exactly one is active at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Realtime,
    Shopping,
    Gold,
}

impl View {
    /// Navigation label
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Keyword Analysis",
            View::Realtime => "Realtime Trends",
            View::Shopping => "Shopping Trends",
            View::Gold => "Golden Keywords",
        }
    }

    /// Position of this view in the navigation bar
    pub fn index(&self) -> usize {
        View::iter().position(|v| v == *self).unwrap_or(0)
    }

    /// View at a navigation position, if any
    pub fn from_index(index: usize) -> Option<View> {
        View::iter().nth(index)
    }

    /// The view after this one, wrapping around
    pub fn next(&self) -> View {
        View::from_index(self.index() + 1).unwrap_or_default()
    }

    /// The view before this one, wrapping around
    pub fn previous(&self) -> View {
        match self.index() {
            0 => View::iter().last().unwrap_or_default(),
            i => View::from_index(i - 1).unwrap_or_default(),
        }
    }
}

impl FromStr for View {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::iter()
            .find(|v| v.as_ref() == s)
            .ok_or_else(|| ParseError::new(UnknownName::View, s))
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Result-listing categories accepted by the search endpoint
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultType {
    #[default]
    Blog,
    News,
    Shop,
    Kin,
}

impl ResultType {
    pub fn label(&self) -> &'static str {
        match self {
            ResultType::Blog => "Blog",
            ResultType::News => "News",
            ResultType::Shop => "Shopping",
            ResultType::Kin => "Q&A",
        }
    }

    /// Wire value for the `type` query parameter
    pub fn as_query(&self) -> &str {
        self.as_ref()
    }

    pub fn next(&self) -> ResultType {
        let all: Vec<ResultType> = ResultType::iter().collect();
        let pos = all.iter().position(|t| t == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    pub fn previous(&self) -> ResultType {
        let all: Vec<ResultType> = ResultType::iter().collect();
        let pos = all.iter().position(|t| t == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

impl FromStr for ResultType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultType::iter()
            .find(|t| t.as_ref() == s)
            .ok_or_else(|| ParseError::new(UnknownName::ResultType, s))
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
