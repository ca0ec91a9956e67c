//! End-to-end resolution tests against the real process environment.
//!
//! Environment mutation goes through `temp_env`, which serializes
//! access so these tests stay safe under the parallel test runner.

use deepreport::{Config, ConfigResolver, EnvSnapshot, OverrideContext, ResultsMode, SearchApi};
use serde_json::json;

/// Every variable the resolver reads, for tests that need a known-clean
/// environment.
fn all_unset() -> Vec<(String, Option<String>)> {
    deepreport::fields()
        .iter()
        .map(|field| (field.env_var(), None))
        .collect()
}

#[test]
fn resolves_pure_defaults_with_clean_environment() {
    temp_env::with_vars(all_unset(), || {
        let config = ConfigResolver::resolve(None);
        assert_eq!(config, Config::default());
        assert_eq!(config.search_api, SearchApi::Tavily);
        assert_eq!(config.number_of_queries, 2);
    });
}

#[test]
fn environment_beats_override_context() {
    temp_env::with_var("NUMBER_OF_QUERIES", Some("5"), || {
        let context = OverrideContext::new().with("number_of_queries", 9);
        let config = ConfigResolver::resolve(Some(&context));
        assert_eq!(config.number_of_queries, 5);
    });
}

#[test]
fn override_context_applies_when_environment_is_absent() {
    temp_env::with_var("WRITER_MODEL", None::<&str>, || {
        let context = OverrideContext::new().with("writer_model", "gpt-5");
        let config = ConfigResolver::resolve(Some(&context));
        assert_eq!(config.writer_model, "gpt-5");
    });
}

#[test]
fn empty_environment_value_shadows_context_then_drops_to_default() {
    temp_env::with_var("PLANNER_MODEL", Some(""), || {
        let context = OverrideContext::new().with("planner_model", "o3");
        let config = ConfigResolver::resolve(Some(&context));
        assert_eq!(config.planner_model, "gpt-5-mini");
    });
}

#[test]
fn environment_enum_and_mode_tokens_resolve() {
    temp_env::with_vars(
        [
            ("SEARCH_API", Some("google_search")),
            ("PROCESS_SEARCH_RESULTS", Some("summarize")),
        ],
        || {
            let config = ConfigResolver::resolve(None);
            assert_eq!(config.search_api, SearchApi::GoogleSearch);
            assert_eq!(config.process_search_results, Some(ResultsMode::Summarize));
        },
    );
}

#[test]
fn structured_environment_value_parses_from_json_text() {
    temp_env::with_var(
        "SEARCH_API_CONFIG",
        Some(r#"{"max_results": 3, "topic": "news"}"#),
        || {
            let config = ConfigResolver::resolve(None);
            let map = config.search_api_config.expect("map should be set");
            assert_eq!(map.get("max_results"), Some(&json!(3)));
            assert_eq!(map.get("topic"), Some(&json!("news")));
        },
    );
}

#[test]
fn out_of_set_environment_token_falls_back_to_default() {
    temp_env::with_var("SEARCH_API", Some("bing"), || {
        let config = ConfigResolver::resolve(None);
        assert_eq!(config.search_api, SearchApi::Tavily);
    });
}

#[test]
fn falsy_context_overrides_are_indistinguishable_from_unset() {
    temp_env::with_vars(all_unset(), || {
        let context = OverrideContext::new()
            .with("include_source_str", false)
            .with("max_search_depth", 0)
            .with("summarization_model", "")
            .with("planner_model_kwargs", json!({}));
        let config = ConfigResolver::resolve(Some(&context));
        assert_eq!(config, Config::default(), "all falsy overrides drop away");
    });
}

#[test]
fn repeated_resolution_yields_equal_configs() {
    temp_env::with_vars(
        [("SEARCH_API", Some("arxiv")), ("MAX_SEARCH_DEPTH", Some("4"))],
        || {
            let context = OverrideContext::new().with("writer_model", "gpt-5");
            let first = ConfigResolver::resolve(Some(&context));
            let second = ConfigResolver::resolve(Some(&context));
            assert_eq!(first, second);
            assert_eq!(first.search_api, SearchApi::Arxiv);
            assert_eq!(first.max_search_depth, 4);
        },
    );
}

#[test]
fn snapshot_isolates_resolution_from_later_environment_changes() {
    temp_env::with_var("NUMBER_OF_QUERIES", Some("6"), || {
        let snapshot = EnvSnapshot::capture();
        temp_env::with_var("NUMBER_OF_QUERIES", Some("99"), || {
            let config = ConfigResolver::resolve_with(&snapshot, None);
            assert_eq!(config.number_of_queries, 6, "snapshot is immutable");
        });
    });
}

#[test]
fn json_context_round_trip_through_resolution() {
    temp_env::with_vars(all_unset(), || {
        let context = OverrideContext::from_json(
            r#"{
                "configurable": {
                    "search_api": "duckduckgo",
                    "number_of_queries": 3,
                    "writer_model_kwargs": {"temperature": 0.1}
                }
            }"#,
        )
        .expect("context should parse");
        let config = ConfigResolver::resolve(Some(&context));
        assert_eq!(config.search_api, SearchApi::Duckduckgo);
        assert_eq!(config.number_of_queries, 3);
        let kwargs = config.writer_model_kwargs.as_ref().expect("kwargs should be set");
        assert_eq!(kwargs.get("temperature"), Some(&json!(0.1)));
        ConfigResolver::validate(&config).expect("resolved config should validate");
    });
}
