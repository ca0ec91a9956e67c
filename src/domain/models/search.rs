use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Search backend enumeration
///
/// Closed set: anything outside these five variants is rejected at
/// parse time with [`ConfigError::UnknownSearchApi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchApi {
    Tavily,
    Arxiv,
    Duckduckgo,
    GoogleSearch,
    None,
}

impl SearchApi {
    /// All valid variants, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Tavily,
        Self::Arxiv,
        Self::Duckduckgo,
        Self::GoogleSearch,
        Self::None,
    ];
}

impl fmt::Display for SearchApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tavily => write!(f, "tavily"),
            Self::Arxiv => write!(f, "arxiv"),
            Self::Duckduckgo => write!(f, "duckduckgo"),
            Self::GoogleSearch => write!(f, "google_search"),
            Self::None => write!(f, "none"),
        }
    }
}

impl FromStr for SearchApi {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tavily" => Ok(Self::Tavily),
            "arxiv" => Ok(Self::Arxiv),
            "duckduckgo" => Ok(Self::Duckduckgo),
            "google_search" => Ok(Self::GoogleSearch),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::UnknownSearchApi(s.to_string())),
        }
    }
}

/// Post-processing strategy for raw search results
///
/// Optional: workflow stages treat `None` as "hand results through
/// unprocessed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsMode {
    Summarize,
    SplitAndRerank,
}

impl fmt::Display for ResultsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summarize => write!(f, "summarize"),
            Self::SplitAndRerank => write!(f, "split_and_rerank"),
        }
    }
}

impl FromStr for ResultsMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize" => Ok(Self::Summarize),
            "split_and_rerank" => Ok(Self::SplitAndRerank),
            _ => Err(ConfigError::UnknownResultsMode(s.to_string())),
        }
    }
}
