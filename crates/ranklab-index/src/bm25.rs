//! BM25 scoring over the inverted index

use crate::index::InvertedIndex;
use ranklab_core::Bm25Params;
use std::collections::HashMap;

/// Score every document containing at least one query term. Documents with
/// no matching term are absent from the map (score 0 by definition), and an
/// empty corpus yields an empty map rather than dividing by zero.
///
/// Query tokens are taken as given: a repeated term contributes once per
/// occurrence, and terms absent from the index contribute nothing.
pub fn score(
    query_tokens: &[String],
    index: &InvertedIndex,
    params: &Bm25Params,
) -> HashMap<String, f64> {
    let mut scores: HashMap<String, f64> = HashMap::new();
    if index.num_docs() == 0 || index.avg_doc_len() == 0.0 {
        return scores;
    }

    let num_docs = index.num_docs() as f64;
    let avg_doc_len = index.avg_doc_len();

    for term in query_tokens {
        let Some(postings) = index.postings(term) else {
            continue;
        };

        let df = postings.len() as f64;
        // "+1 inside the log" variant: stays non-negative even when the
        // term appears in more than half the corpus.
        let idf = ((num_docs - df + 0.5) / (df + 0.5) + 1.0).ln();

        for posting in postings {
            let doc_len = index.doc_len(&posting.doc_id).unwrap_or(0) as f64;
            let tf = posting.tf as f64;

            let numerator = tf * (params.k1 + 1.0);
            let denominator =
                tf + params.k1 * (1.0 - params.b + params.b * (doc_len / avg_doc_len));

            *scores.entry(posting.doc_id.clone()).or_insert(0.0) += idf * (numerator / denominator);
        }
    }

    scores
}
