//! Configuration for analysis, scoring, and query selection

/// BM25 term-saturation and length-normalization parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization strength.
    pub b: f64,
}

impl Bm25Params {
    pub fn new() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyzer behavior toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Apply Snowball English stemming after stopword removal. When off,
    /// tokens pass through unstemmed (logged at analyzer construction).
    pub stemming: bool,
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self { stemming: true }
    }
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-level query selection policy. The ranking pipeline itself never
/// consults this; it receives an already-filtered query stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFilter {
    All,
    /// Only queries whose id parses as an odd integer.
    OddIds,
    /// Only queries whose id parses as an even integer.
    EvenIds,
}

impl QueryFilter {
    /// Whether a query with this id should be run. Parity variants reject
    /// ids that do not parse as integers.
    pub fn accepts(&self, id: &str) -> bool {
        match self {
            QueryFilter::All => true,
            QueryFilter::OddIds => id.parse::<u64>().map(|n| n % 2 == 1).unwrap_or(false),
            QueryFilter::EvenIds => id.parse::<u64>().map(|n| n % 2 == 0).unwrap_or(false),
        }
    }
}
