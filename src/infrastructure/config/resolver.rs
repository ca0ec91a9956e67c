//! Layered configuration resolution
//!
//! Each field resolves through three ordered sources:
//!
//! 1. Environment variable (field name upper-cased), which wins
//!    outright, even when set to the empty string
//! 2. The override context's `configurable` sub-mapping
//! 3. The compiled-in default
//!
//! A resolved candidate that is falsy for its runtime type (null,
//! `false`, zero, empty string, empty array, empty mapping) is dropped
//! and the default used instead. This makes an explicit falsy override
//! indistinguishable from "not set"; the policy lives in [`is_falsy`]
//! and nowhere else.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::schema::{self, FieldSpec};
use crate::domain::error::ConfigError;
use crate::domain::models::{Config, ResultsMode, SearchApi};

/// Caller-supplied configuration overrides
///
/// A nested mapping whose reserved `configurable` key carries
/// field-name → raw value entries. Unknown sibling keys are ignored,
/// and a missing `configurable` key is equivalent to an empty mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideContext {
    /// Field-name → raw value overrides
    #[serde(default)]
    configurable: Map<String, Value>,
}

impl OverrideContext {
    /// Empty context; resolution falls through to environment and
    /// defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one field override, builder style.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.configurable.insert(field.into(), value.into());
        self
    }

    /// Parse a context from its JSON form, e.g.
    /// `{"configurable": {"writer_model": "gpt-5"}}`.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("Failed to parse override context from JSON")
    }

    /// Raw override for a field, if one was supplied.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.configurable.get(field)
    }

    /// Whether the context carries no overrides at all.
    pub fn is_empty(&self) -> bool {
        self.configurable.is_empty()
    }
}

/// Immutable snapshot of the relevant environment variables
///
/// Captured once per resolution call so a single resolution is
/// deterministic even if the process environment changes underneath it.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment, reading only the
    /// variables named by the field registry.
    pub fn capture() -> Self {
        let vars = schema::fields()
            .iter()
            .filter_map(|field| {
                let name = field.env_var();
                env::var(&name).ok().map(|value| (name, value))
            })
            .collect();
        Self { vars }
    }

    /// Snapshot with no variables set. Useful for tests and for
    /// embedders that want resolution isolated from the process
    /// environment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add one variable, builder style. The name is used verbatim, so
    /// pass the upper-cased form.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    fn get(&self, field: &FieldSpec) -> Option<&str> {
        self.vars.get(&field.env_var()).map(String::as_str)
    }
}

/// Truthiness predicate applied to every resolved candidate.
///
/// Null, `false`, numeric zero, the empty string, and empty
/// arrays/mappings are falsy; everything else is truthy. Falsy
/// candidates are dropped in favor of the field default, so a caller
/// cannot explicitly set a field to a falsy value.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() < f64::EPSILON),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

/// Raw candidate for one field: environment first, then the override
/// context, then absent. No coercion happens here.
fn candidate(field: &FieldSpec, env: &EnvSnapshot, context: &OverrideContext) -> Option<Value> {
    if let Some(raw) = env.get(field) {
        // Present wins, even as the empty string.
        return Some(Value::String(raw.to_string()));
    }
    context.get(field.name).cloned()
}

/// Configuration resolver
///
/// Stateless facade that turns an optional [`OverrideContext`] plus the
/// process environment into an immutable [`Config`]. Resolution never
/// fails: unusable candidates are logged and replaced by defaults.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve a configuration from the current process environment and
    /// an optional override context.
    pub fn resolve(context: Option<&OverrideContext>) -> Config {
        Self::resolve_with(&EnvSnapshot::capture(), context)
    }

    /// Resolve against an explicit environment snapshot.
    pub fn resolve_with(env: &EnvSnapshot, context: Option<&OverrideContext>) -> Config {
        let empty = OverrideContext::default();
        let context = context.unwrap_or(&empty);

        let mut config = Config::default();
        for field in schema::fields() {
            if !field.participates_in_construction {
                continue;
            }
            let Some(raw) = candidate(field, env, context) else {
                continue;
            };
            if is_falsy(&raw) {
                debug!(field = field.name, "dropping falsy override, keeping default");
                continue;
            }
            apply(&mut config, field, &raw);
        }
        config
    }

    /// First-use checks performed by workflow stages, not by
    /// construction: construction always succeeds, so stages call this
    /// before trusting a configuration they were handed.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.number_of_queries == 0 {
            return Err(ConfigError::InvalidNumberOfQueries(config.number_of_queries));
        }

        let models = [
            ("summarization", config.summarization_model.as_str()),
            ("planner", config.planner_model.as_str()),
            ("writer", config.writer_model.as_str()),
        ];
        for (role, model) in models {
            if model.is_empty() {
                return Err(ConfigError::EmptyModel(role));
            }
        }

        let providers = [
            ("summarization", config.summarization_model_provider.as_str()),
            ("planner", config.planner_provider.as_str()),
            ("writer", config.writer_provider.as_str()),
        ];
        for (role, provider) in providers {
            if provider.is_empty() {
                return Err(ConfigError::EmptyProvider(role));
            }
        }

        Ok(())
    }
}

/// Assign one truthy candidate to its named field, coercing leniently
/// from the raw JSON form. Candidates that do not fit the declared type
/// are logged and skipped, leaving the default in place.
fn apply(config: &mut Config, field: &FieldSpec, raw: &Value) {
    match field.name {
        "report_structure" => match as_text(raw) {
            Some(text) => config.report_structure = text,
            None => discard(field, raw),
        },
        "search_api" => match raw.as_str().map(SearchApi::from_str) {
            Some(Ok(api)) => config.search_api = api,
            Some(Err(error)) => warn!(field = field.name, %error, "ignoring override"),
            None => discard(field, raw),
        },
        "search_api_config" => match as_map(raw) {
            Some(map) => config.search_api_config = Some(map),
            None => discard(field, raw),
        },
        "process_search_results" => match raw.as_str().map(ResultsMode::from_str) {
            Some(Ok(mode)) => config.process_search_results = Some(mode),
            Some(Err(error)) => warn!(field = field.name, %error, "ignoring override"),
            None => discard(field, raw),
        },
        "summarization_model_provider" => match as_text(raw) {
            Some(text) => config.summarization_model_provider = text,
            None => discard(field, raw),
        },
        "summarization_model" => match as_text(raw) {
            Some(text) => config.summarization_model = text,
            None => discard(field, raw),
        },
        "max_structured_output_retries" => match as_uint(raw) {
            Some(count) => config.max_structured_output_retries = count,
            None => discard(field, raw),
        },
        "include_source_str" => match as_bool(raw) {
            Some(flag) => config.include_source_str = flag,
            None => discard(field, raw),
        },
        "number_of_queries" => match as_uint(raw) {
            Some(count) => config.number_of_queries = count,
            None => discard(field, raw),
        },
        "max_search_depth" => match as_uint(raw) {
            Some(depth) => config.max_search_depth = depth,
            None => discard(field, raw),
        },
        "planner_provider" => match as_text(raw) {
            Some(text) => config.planner_provider = text,
            None => discard(field, raw),
        },
        "planner_model" => match as_text(raw) {
            Some(text) => config.planner_model = text,
            None => discard(field, raw),
        },
        "planner_model_kwargs" => match as_map(raw) {
            Some(map) => config.planner_model_kwargs = Some(map),
            None => discard(field, raw),
        },
        "writer_provider" => match as_text(raw) {
            Some(text) => config.writer_provider = text,
            None => discard(field, raw),
        },
        "writer_model" => match as_text(raw) {
            Some(text) => config.writer_model = text,
            None => discard(field, raw),
        },
        "writer_model_kwargs" => match as_map(raw) {
            Some(map) => config.writer_model_kwargs = Some(map),
            None => discard(field, raw),
        },
        other => warn!(field = other, "registry names a field Config does not carry"),
    }
}

fn discard(field: &FieldSpec, raw: &Value) {
    warn!(
        field = field.name,
        value = %raw,
        "ignoring override that does not fit the declared field type"
    );
}

fn as_text(raw: &Value) -> Option<String> {
    raw.as_str().map(ToString::to_string)
}

fn as_uint(raw: &Value) -> Option<u32> {
    match raw {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn as_bool(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn as_map(raw: &Value) -> Option<Map<String, Value>> {
    match raw {
        Value::Object(entries) => Some(entries.clone()),
        // Environment variables can only carry structured values as
        // JSON text.
        Value::String(text) => serde_json::from_str(text).ok(),
        _ => None,
    }
}
