//! Static field registry for the workflow configuration
//!
//! One [`FieldSpec`] per configurable field, in a fixed order, built
//! once at first use. The resolver walks this list instead of
//! reflecting over the `Config` struct, so the set of resolvable
//! fields is explicit and auditable in one place.

use std::sync::LazyLock;

use serde_json::{json, Value};

use crate::domain::models::config::{
    default_max_search_depth, default_max_structured_output_retries, default_number_of_queries,
    default_planner_model, default_provider, default_report_structure, default_search_api,
    default_summarization_model, default_writer_model,
};

/// Declared type constraint of a configurable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text
    Text,
    /// Closed [`SearchApi`](crate::SearchApi) variant set
    SearchApi,
    /// Optional closed [`ResultsMode`](crate::ResultsMode) literal set
    ResultsMode,
    /// Optional structured mapping with string keys
    StructuredMap,
    /// Non-negative integer
    UInt,
    /// Boolean flag
    Bool,
}

/// Static descriptor of one configurable field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Unique field identifier; upper-cased to form the environment
    /// variable name
    pub name: &'static str,

    /// Declared type constraint
    pub kind: FieldKind,

    /// Compiled-in default, in the same raw JSON form candidates use
    pub default: Value,

    /// Whether the resolver may set this field from caller input
    pub participates_in_construction: bool,
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldKind, default: Value) -> Self {
        Self {
            name,
            kind,
            default,
            participates_in_construction: true,
        }
    }

    /// Environment variable read for this field.
    pub fn env_var(&self) -> String {
        self.name.to_uppercase()
    }
}

static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    vec![
        FieldSpec::new(
            "report_structure",
            FieldKind::Text,
            json!(default_report_structure()),
        ),
        FieldSpec::new(
            "search_api",
            FieldKind::SearchApi,
            json!(default_search_api().to_string()),
        ),
        FieldSpec::new("search_api_config", FieldKind::StructuredMap, Value::Null),
        FieldSpec::new("process_search_results", FieldKind::ResultsMode, Value::Null),
        FieldSpec::new(
            "summarization_model_provider",
            FieldKind::Text,
            json!(default_provider()),
        ),
        FieldSpec::new(
            "summarization_model",
            FieldKind::Text,
            json!(default_summarization_model()),
        ),
        FieldSpec::new(
            "max_structured_output_retries",
            FieldKind::UInt,
            json!(default_max_structured_output_retries()),
        ),
        FieldSpec::new("include_source_str", FieldKind::Bool, json!(false)),
        FieldSpec::new(
            "number_of_queries",
            FieldKind::UInt,
            json!(default_number_of_queries()),
        ),
        FieldSpec::new(
            "max_search_depth",
            FieldKind::UInt,
            json!(default_max_search_depth()),
        ),
        FieldSpec::new("planner_provider", FieldKind::Text, json!(default_provider())),
        FieldSpec::new(
            "planner_model",
            FieldKind::Text,
            json!(default_planner_model()),
        ),
        FieldSpec::new("planner_model_kwargs", FieldKind::StructuredMap, Value::Null),
        FieldSpec::new("writer_provider", FieldKind::Text, json!(default_provider())),
        FieldSpec::new(
            "writer_model",
            FieldKind::Text,
            json!(default_writer_model()),
        ),
        FieldSpec::new("writer_model_kwargs", FieldKind::StructuredMap, Value::Null),
    ]
});

/// All configurable fields, in deterministic declaration order.
pub fn fields() -> &'static [FieldSpec] {
    &FIELDS
}
