//! Configuration resolution infrastructure
//!
//! Three collaborating pieces:
//! - Static field registry (schema)
//! - Per-field value resolution: environment, then override context
//! - Factory that filters falsy candidates and builds the `Config`

pub mod resolver;
pub mod schema;

pub use resolver::{is_falsy, ConfigResolver, EnvSnapshot, OverrideContext};
pub use schema::{fields, FieldKind, FieldSpec};
