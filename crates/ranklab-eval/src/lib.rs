//! TREC-style evaluation of ranked retrieval runs

mod metrics;
mod report;

pub use metrics::{evaluate, AggregateMetrics, Qrels, QueryMetrics, RunResults};
pub use report::write_report;
