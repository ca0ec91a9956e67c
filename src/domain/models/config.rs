use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::search::{ResultsMode, SearchApi};

/// Default outline handed to the writer stage when the caller supplies
/// no report structure of their own.
pub const DEFAULT_REPORT_STRUCTURE: &str = "\
Use this structure to create a report on the user-provided topic:

1. Introduction (no research needed)
   - Brief overview of the topic area

2. Main Body Sections:
   - Each section should focus on a sub-topic of the user-provided topic

3. Conclusion
   - Aim for 1 structural element (either a list or table) that distills the main body sections
   - Provide a concise summary of the report";

/// Resolved configuration for one report-generation run.
///
/// Produced by [`ConfigResolver::resolve`](crate::ConfigResolver::resolve)
/// and never mutated afterwards; each workflow stage (search,
/// summarization, planning, writing) reads the fields it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Section outline the writer stage follows
    #[serde(default = "default_report_structure")]
    pub report_structure: String,

    /// Which search backend to query
    #[serde(default = "default_search_api")]
    pub search_api: SearchApi,

    /// Backend-specific search parameters (passed through untyped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_api_config: Option<Map<String, Value>>,

    /// Post-processing applied to raw search results, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_search_results: Option<ResultsMode>,

    /// Provider for the summarization model
    #[serde(default = "default_provider")]
    pub summarization_model_provider: String,

    /// Model used to summarize search results
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,

    /// Retry budget for structured-output calls
    #[serde(default = "default_max_structured_output_retries")]
    pub max_structured_output_retries: u32,

    /// Whether raw source text is carried alongside summaries
    #[serde(default)]
    pub include_source_str: bool,

    /// Search queries generated per section
    #[serde(default = "default_number_of_queries")]
    pub number_of_queries: u32,

    /// Reflection/re-search iterations allowed per section
    #[serde(default = "default_max_search_depth")]
    pub max_search_depth: u32,

    /// Provider for the planner model
    #[serde(default = "default_provider")]
    pub planner_provider: String,

    /// Model used to plan the report outline
    #[serde(default = "default_planner_model")]
    pub planner_model: String,

    /// Extra keyword arguments forwarded to the planner model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_model_kwargs: Option<Map<String, Value>>,

    /// Provider for the writer model
    #[serde(default = "default_provider")]
    pub writer_provider: String,

    /// Model used to write report sections
    #[serde(default = "default_writer_model")]
    pub writer_model: String,

    /// Extra keyword arguments forwarded to the writer model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer_model_kwargs: Option<Map<String, Value>>,
}

pub(crate) fn default_report_structure() -> String {
    DEFAULT_REPORT_STRUCTURE.to_string()
}

pub(crate) const fn default_search_api() -> SearchApi {
    SearchApi::Tavily
}

pub(crate) fn default_provider() -> String {
    "openai".to_string()
}

pub(crate) fn default_summarization_model() -> String {
    "gpt-4o-mini".to_string()
}

pub(crate) const fn default_max_structured_output_retries() -> u32 {
    3
}

pub(crate) const fn default_number_of_queries() -> u32 {
    2
}

pub(crate) const fn default_max_search_depth() -> u32 {
    2
}

pub(crate) fn default_planner_model() -> String {
    "gpt-5-mini".to_string()
}

pub(crate) fn default_writer_model() -> String {
    "gpt-5-mini".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_structure: default_report_structure(),
            search_api: default_search_api(),
            search_api_config: None,
            process_search_results: None,
            summarization_model_provider: default_provider(),
            summarization_model: default_summarization_model(),
            max_structured_output_retries: default_max_structured_output_retries(),
            include_source_str: false,
            number_of_queries: default_number_of_queries(),
            max_search_depth: default_max_search_depth(),
            planner_provider: default_provider(),
            planner_model: default_planner_model(),
            planner_model_kwargs: None,
            writer_provider: default_provider(),
            writer_model: default_writer_model(),
            writer_model_kwargs: None,
        }
    }
}
