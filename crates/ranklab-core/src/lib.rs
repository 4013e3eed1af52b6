//! Shared types, configuration, and text analysis for ranklab

mod analyzer;
mod config;
mod types;

pub use analyzer::Analyzer;
pub use config::{AnalyzerOptions, Bm25Params, QueryFilter};
pub use types::{DocRecord, QueryRecord, RankedDoc};
