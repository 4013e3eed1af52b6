//! Run log records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the run log (`runs.jsonl`), appended after each completed
/// retrieval run so experiment configurations stay comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_tag: String,
    pub timestamp: DateTime<Utc>,
    pub corpus: String,
    pub full_text: bool,
    pub num_docs: usize,
    pub vocab_size: usize,
    pub avg_doc_len: f64,
    pub num_queries: usize,
    pub output: String,
}
