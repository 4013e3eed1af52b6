//! Text normalization: lowercasing, token extraction, stopwords, stemming

use crate::config::AnalyzerOptions;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Turns raw text into normalized terms. Immutable once built, so a single
/// analyzer serves both indexing and query processing.
pub struct Analyzer {
    stopwords: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl Analyzer {
    pub fn new(stopwords: HashSet<String>, options: AnalyzerOptions) -> Self {
        let stemmer = if options.stemming {
            Some(Stemmer::create(Algorithm::English))
        } else {
            tracing::info!("stemming disabled; tokens pass through unstemmed");
            None
        };
        Self { stopwords, stemmer }
    }

    /// Lowercase the input, extract alphanumeric runs (everything else acts
    /// as a separator), drop stopwords and single-character tokens, then
    /// stem when enabled. Empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let re = TOKEN_RE.get_or_init(|| Regex::new(r"[a-z0-9]+").expect("valid regex"));
        let lowered = text.to_lowercase();

        let mut tokens = Vec::new();
        for mat in re.find_iter(&lowered) {
            let token = mat.as_str();
            if token.len() <= 1 || self.stopwords.contains(token) {
                continue;
            }
            match &self.stemmer {
                Some(stemmer) => tokens.push(stemmer.stem(token).into_owned()),
                None => tokens.push(token.to_string()),
            }
        }
        tokens
    }
}
