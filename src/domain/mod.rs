//! Domain layer for the report workflow configuration core
//!
//! This module contains the configuration value object, the closed
//! search/processing enumerations, and domain error types.

pub mod error;
pub mod models;

// Re-export error types for convenient access
pub use error::ConfigError;
