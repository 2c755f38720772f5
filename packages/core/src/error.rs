//! Parse errors for the named enums exposed to callers
use thiserror::Error;

/// Which family of names failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownName {
    View,
    ResultType,
    Theme,
}

impl std::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UnknownName::View => "view",
            UnknownName::ResultType => "result type",
            UnknownName::Theme => "theme",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {name}")]
pub struct ParseError {
    pub kind: UnknownName,
    pub name: String,
}

impl ParseError {
    pub fn new(kind: UnknownName, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}
