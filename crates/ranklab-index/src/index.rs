//! In-memory inverted index over a document stream

use ranklab_core::{Analyzer, DocRecord};
use std::collections::HashMap;

const PROGRESS_INTERVAL: usize = 2000;

/// One entry in a term's postings list. At most one posting exists per
/// (term, document) pair, and tf is always >= 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: String,
    pub tf: u32,
}

/// Term -> postings mapping plus the corpus statistics BM25 needs.
///
/// Postings within a list follow document-processing order; each document
/// contributes at most one posting per term, so the order is stable across
/// runs over the same corpus.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    doc_lengths: HashMap<String, usize>,
    num_docs: usize,
    avg_doc_len: f64,
}

impl InvertedIndex {
    /// Build an index in a single forward pass over the document stream.
    ///
    /// Content is the title, or title + body when `full_text` is set. Every
    /// document gets a length entry, including documents whose content
    /// normalizes to zero tokens.
    pub fn build<I>(docs: I, analyzer: &Analyzer, full_text: bool) -> Self
    where
        I: IntoIterator<Item = DocRecord>,
    {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_lengths = HashMap::new();
        let mut total_tokens = 0usize;
        let mut num_docs = 0usize;

        for doc in docs {
            let tokens = analyzer.tokenize(&doc.content(full_text));
            total_tokens += tokens.len();
            doc_lengths.insert(doc.id.clone(), tokens.len());
            num_docs += 1;

            let mut term_counts: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *term_counts.entry(token).or_insert(0) += 1;
            }
            for (term, tf) in term_counts {
                postings.entry(term).or_default().push(Posting {
                    doc_id: doc.id.clone(),
                    tf,
                });
            }

            if num_docs % PROGRESS_INTERVAL == 0 {
                tracing::info!("indexed {} documents", num_docs);
            }
        }

        let avg_doc_len = if num_docs > 0 {
            total_tokens as f64 / num_docs as f64
        } else {
            0.0
        };

        tracing::info!(
            "indexing complete: {} documents, {} terms, avg doc len {:.2}",
            num_docs,
            postings.len(),
            avg_doc_len
        );

        Self {
            postings,
            doc_lengths,
            num_docs,
            avg_doc_len,
        }
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    /// Number of distinct terms in the index.
    pub fn vocab_size(&self) -> usize {
        self.postings.len()
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(|list| list.as_slice())
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map(|list| list.len()).unwrap_or(0)
    }

    /// Post-normalization token count of a document, if it was indexed.
    pub fn doc_len(&self, doc_id: &str) -> Option<usize> {
        self.doc_lengths.get(doc_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranklab_core::AnalyzerOptions;
    use std::collections::HashSet;

    fn doc(id: &str, title: &str, text: &str) -> DocRecord {
        DocRecord {
            id: id.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    fn plain_analyzer() -> Analyzer {
        Analyzer::new(HashSet::new(), AnalyzerOptions { stemming: false })
    }

    #[test]
    fn test_build_counts_and_lengths() {
        let analyzer = plain_analyzer();
        let docs = vec![
            doc("d1", "cell growth growth", ""),
            doc("d2", "cell decay", ""),
        ];
        let index = InvertedIndex::build(docs, &analyzer, false);

        assert_eq!(index.num_docs(), 2);
        assert_eq!(index.vocab_size(), 3);
        assert_eq!(index.doc_len("d1"), Some(3));
        assert_eq!(index.doc_len("d2"), Some(2));
        assert!((index.avg_doc_len() - 2.5).abs() < 1e-12);

        let growth = index.postings("growth").unwrap();
        assert_eq!(growth.len(), 1);
        assert_eq!(growth[0].tf, 2);
        assert_eq!(index.doc_freq("cell"), 2);
    }

    #[test]
    fn test_full_text_flag_switches_content() {
        let analyzer = plain_analyzer();
        let docs = vec![doc("d1", "title words", "body words here")];

        let title_only = InvertedIndex::build(docs.clone(), &analyzer, false);
        assert_eq!(title_only.doc_len("d1"), Some(2));
        assert_eq!(title_only.doc_freq("body"), 0);

        let full = InvertedIndex::build(docs, &analyzer, true);
        assert_eq!(full.doc_len("d1"), Some(5));
        assert_eq!(full.doc_freq("body"), 1);
        // "words" occurs in both title and body of the same document
        assert_eq!(full.postings("words").unwrap()[0].tf, 2);
    }

    #[test]
    fn test_zero_token_document_keeps_length_entry() {
        let analyzer = plain_analyzer();
        let docs = vec![doc("empty", "...", ""), doc("d2", "actual words", "")];
        let index = InvertedIndex::build(docs, &analyzer, false);

        assert_eq!(index.num_docs(), 2);
        assert_eq!(index.doc_len("empty"), Some(0));
        assert!((index.avg_doc_len() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_corpus() {
        let analyzer = plain_analyzer();
        let index = InvertedIndex::build(Vec::new(), &analyzer, true);
        assert_eq!(index.num_docs(), 0);
        assert_eq!(index.avg_doc_len(), 0.0);
        assert_eq!(index.vocab_size(), 0);
    }

    #[test]
    fn test_postings_follow_document_order() {
        let analyzer = plain_analyzer();
        let docs = vec![
            doc("b", "shared term", ""),
            doc("a", "shared term", ""),
            doc("c", "shared term", ""),
        ];
        let index = InvertedIndex::build(docs, &analyzer, false);
        let ids: Vec<&str> = index
            .postings("shared")
            .unwrap()
            .iter()
            .map(|p| p.doc_id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
