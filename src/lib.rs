//! Deepreport - Research Report Workflow Configuration
//!
//! Deepreport is the configuration core of a multi-stage document and
//! report-generation workflow (search, summarization, planning,
//! writing). It resolves an immutable [`Config`] from three layered
//! sources, highest priority first:
//!
//! 1. Process environment variables, one per field, named by
//!    upper-casing the field identifier (`MAX_SEARCH_DEPTH` for
//!    `max_search_depth`)
//! 2. A caller-supplied [`OverrideContext`] carrying a `configurable`
//!    sub-mapping of field overrides
//! 3. Compiled-in defaults
//!
//! Resolved values that are falsy for their runtime type are dropped
//! in favor of the defaults; see
//! [`is_falsy`] for the exact rule and its consequences.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `Config` value object, closed
//!   enumerations, and error types
//! - **Infrastructure Layer** (`infrastructure`): the field registry
//!   and the resolution pipeline
//!
//! # Example
//!
//! ```
//! use deepreport::{ConfigResolver, OverrideContext};
//!
//! let context = OverrideContext::new()
//!     .with("search_api", "arxiv")
//!     .with("writer_model", "gpt-5");
//! let config = ConfigResolver::resolve(Some(&context));
//! # let _ = config;
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::ConfigError;
pub use domain::models::{Config, ResultsMode, SearchApi, DEFAULT_REPORT_STRUCTURE};
pub use infrastructure::config::{
    fields, is_falsy, ConfigResolver, EnvSnapshot, FieldKind, FieldSpec, OverrideContext,
};
