use thiserror::Error;

/// Configuration error types
///
/// Resolution itself never fails; these surface at the seams where a
/// workflow stage first consumes a value (enum parsing, validation).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Invalid search_api: {0}. Must be one of: tavily, arxiv, duckduckgo, google_search, none"
    )]
    UnknownSearchApi(String),

    #[error("Invalid process_search_results: {0}. Must be one of: summarize, split_and_rerank")]
    UnknownResultsMode(String),

    #[error("Invalid number_of_queries: {0}. Must be positive")]
    InvalidNumberOfQueries(u32),

    #[error("Model name for {0} cannot be empty")]
    EmptyModel(&'static str),

    #[error("Provider for {0} cannot be empty")]
    EmptyProvider(&'static str),
}
