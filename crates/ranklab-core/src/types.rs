//! Record types shared across the indexing, ranking, and evaluation crates

use serde::{Deserialize, Serialize};

/// One corpus document, as read from a line-delimited JSON corpus file.
///
/// Only derived statistics survive indexing; the record itself is dropped
/// after tokenization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl DocRecord {
    /// Indexable content: the title, or title + body in full-text mode.
    pub fn content(&self, full_text: bool) -> String {
        if full_text {
            format!("{} {}", self.title, self.text)
        } else {
            self.title.clone()
        }
    }
}

/// One query, as read from a line-delimited JSON query file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// A single ranked retrieval result for some query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDoc {
    pub doc_id: String,
    /// 1-based, dense, unique within a query.
    pub rank: usize,
    pub score: f64,
}
