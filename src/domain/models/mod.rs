pub mod config;
pub mod search;

pub use config::{Config, DEFAULT_REPORT_STRUCTURE};
pub use search::{ResultsMode, SearchApi};
