//! Infrastructure layer for the configuration core
//!
//! External-facing machinery: environment capture and the resolution
//! pipeline over the domain models.

pub mod config;
